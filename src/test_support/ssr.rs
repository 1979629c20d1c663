use leptos::*;

/// Runs `f` inside a fresh reactive runtime and disposes it afterwards,
/// so signals and contexts never leak between tests.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a component tree to its SSR HTML string. Resource loading is
/// suppressed for the duration, so pages built around `create_resource`
/// render their `Suspense` fallbacks instead of fetching.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(move || view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
