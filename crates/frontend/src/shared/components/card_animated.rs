//! CardAnimated: Thaw `Card` that fades in on mount.
//!
//! The `card-appear` keyframes live in `styles/app.css`. Pass growing
//! `delay_ms` values to cards in a row for a stagger effect:
//!
//! ```rust,ignore
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=80>  // card 2
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = card_style(delay_ms, &style);

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}

fn card_style(delay_ms: u32, extra: &str) -> String {
    let animation = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    if extra.is_empty() {
        animation
    } else {
        format!("{} {}", animation, extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_style() {
        assert_eq!(card_style(0, ""), "animation: card-appear 0.28s ease-out 0ms both;");
        assert_eq!(
            card_style(80, "max-width: 400px;"),
            "animation: card-appear 0.28s ease-out 80ms both; max-width: 400px;"
        );
    }
}
