use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::catalog::QUOTES;
use crate::config;

pub fn next_quote(index: usize) -> usize {
    (index + 1) % QUOTES.len()
}

/// Rotating quote. The interval fades the quote out, and the end of the
/// fade swaps in the next one.
#[function_component(Subtitle)]
pub fn subtitle() -> Html {
    let index = use_state(|| 0usize);
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let interval = Interval::new(config::QUOTE_INTERVAL_MS, move || {
                visible.set(false);
            });
            move || drop(interval)
        }, ());
    }

    let on_transition_end = {
        let index = index.clone();
        let visible = visible.clone();
        Callback::from(move |_: TransitionEvent| {
            if !*visible {
                index.set(next_quote(*index));
                visible.set(true);
            }
        })
    };

    let opacity = if *visible { 1 } else { 0 };

    html! {
        <div class="subtitle">
            <p
                ontransitionend={on_transition_end}
                style={format!("opacity: {}; transition: opacity 0.5s ease-in-out;", opacity)}
            >
                {format!("\"{}\"", QUOTES[*index])}
            </p>
        </div>
    }
}
