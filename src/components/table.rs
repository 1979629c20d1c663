use leptos::*;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const EMPTY_TABLE_TEXT: &str = "No records found";

/// Number of pages needed for `total_items`, never less than one so the
/// pager label always reads "Page 1 of 1" for an empty list.
pub fn page_count(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 1;
    }
    total_items.div_ceil(items_per_page).max(1)
}

/// Index range of the rows visible on `page`. A page past the end of the
/// data yields an empty range rather than clamping the page itself: the
/// page number only moves when the user presses Prev or Next.
pub fn page_window(page: usize, items_per_page: usize, total_items: usize) -> std::ops::Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(items_per_page)
        .min(total_items);
    let end = start.saturating_add(items_per_page).min(total_items);
    start..end
}

pub fn previous_page(page: usize) -> usize {
    page.saturating_sub(1).max(1)
}

pub fn next_page(page: usize, total_pages: usize) -> usize {
    page.saturating_add(1).min(total_pages)
}

/// Rows visible on `page`, each paired with its index within that page.
/// The index restarts at zero on every page.
pub fn page_items<T: Clone>(items: &[T], page: usize, items_per_page: usize) -> Vec<(usize, T)> {
    let window = page_window(page, items_per_page, items.len());
    items[window].iter().cloned().enumerate().collect()
}

/// Client-side paginated table. The full data set lives in `items`; the
/// component slices out the current page and hands each visible row to
/// `render_row` together with its index within the page.
#[component]
pub fn PaginatedTable<T, F, V>(
    #[prop(into)] items: MaybeSignal<Vec<T>>,
    #[prop(default = DEFAULT_ITEMS_PER_PAGE)] items_per_page: usize,
    headers: Vec<&'static str>,
    render_row: F,
) -> impl IntoView
where
    T: Clone + 'static,
    F: Fn(T, usize) -> V + 'static,
    V: IntoView,
{
    let (current_page, set_current_page) = create_signal(1usize);
    let column_count = headers.len();

    let items_for_pages = items.clone();
    let total_pages = create_memo(move |_| page_count(items_for_pages.get().len(), items_per_page));

    let items_for_empty = items.clone();
    let is_empty = create_memo(move |_| items_for_empty.get().is_empty());

    let render_row = store_value(render_row);
    let rows = move || {
        let all = items.get();
        page_items(&all, current_page.get(), items_per_page)
            .into_iter()
            .map(|(index, item)| render_row.with_value(|f| f(item, index)).into_view())
            .collect::<Vec<_>>()
    };

    let on_prev = move |_| set_current_page.update(|page| *page = previous_page(*page));
    let on_next = move |_| {
        let pages = total_pages.get_untracked();
        set_current_page.update(|page| *page = next_page(*page, pages));
    };

    view! {
        <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated shadow-sm">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        {headers
                            .into_iter()
                            .map(|header| view! {
                                <th scope="col" class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wide text-fg-muted">
                                    {header}
                                </th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <Show
                        when=move || !is_empty.get()
                        fallback=move || view! {
                            <tr>
                                <td colspan=column_count class="px-4 py-8 text-center text-sm text-fg-muted">
                                    {EMPTY_TABLE_TEXT}
                                </td>
                            </tr>
                        }
                    >
                        {rows.clone()}
                    </Show>
                </tbody>
            </table>
            <Show when=move || { total_pages.get() > 1 }>
                <div class="flex items-center justify-between border-t border-border px-4 py-3">
                    <button
                        class="rounded-md border border-border px-3 py-1.5 text-sm font-medium text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50 disabled:cursor-not-allowed"
                        on:click=on_prev
                        disabled=move || current_page.get() <= 1
                    >
                        "Prev"
                    </button>
                    <span class="text-sm text-fg-muted">
                        {move || format!("Page {} of {}", current_page.get(), total_pages.get())}
                    </span>
                    <button
                        class="rounded-md border border-border px-3 py-1.5 text-sm font-medium text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50 disabled:cursor-not-allowed"
                        on:click=on_next
                        disabled=move || current_page.get() >= total_pages.get()
                    >
                        "Next"
                    </button>
                </div>
            </Show>
        </div>
    }
}
