use leptos::prelude::*;

pub const MOBILE_QUERY: &str = "(max-width: 768px)";

/// Tracks whether `query` matches. Always `false` during server rendering;
/// the first real value lands once the component mounts in the browser.
pub fn use_media_query(query: &'static str) -> Signal<bool> {
    let (matches, set_matches) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let evaluate = move || {
            let now = window()
                .match_media(query)
                .ok()
                .flatten()
                .map(|list| list.matches())
                .unwrap_or(false);
            if matches.get_untracked() != now {
                set_matches.set(now);
            }
        };

        Effect::new(move |_| evaluate());
        let handle = window_event_listener(leptos::ev::resize, move |_| evaluate());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (query, set_matches);

    matches.into()
}
