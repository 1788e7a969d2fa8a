//! Headline figures that count up from zero the first time the section
//! scrolls into view. The easing and the displayed value are plain
//! arithmetic; an interval ticker drives the progress and stops itself
//! once the animation lands.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::viewport::use_section_reveal;

const COUNT_UP_DURATION_MS: f64 = 2_000.0;
const TICK_MS: u32 = 40;
const STATS_REVEAL_MARGIN: f64 = 50.0;

struct Stat {
    value: u32,
    prefix: &'static str,
    suffix: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat {
        value: 15,
        prefix: "",
        suffix: "+",
        label: "Projets livrés",
    },
    Stat {
        value: 98,
        prefix: "",
        suffix: "%",
        label: "Clients satisfaits",
    },
    Stat {
        value: 24,
        prefix: "<",
        suffix: "h",
        label: "Temps de réponse",
    },
    Stat {
        value: 72,
        prefix: "",
        suffix: "h",
        label: "Livraison express",
    },
];

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Displayed value for a target at the given animation progress.
pub fn count_at(target: u32, progress: f64) -> u32 {
    (ease_out_cubic(progress.clamp(0.0, 1.0)) * f64::from(target)).round() as u32
}

#[function_component(Stats)]
pub fn stats() -> Html {
    let revealed = use_section_reveal("stats", STATS_REVEAL_MARGIN);
    let progress = use_state_eq(|| 0.0f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |revealed| {
                let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let mut stop = None;
                if *revealed {
                    let elapsed = Cell::new(0.0f64);
                    *ticker.borrow_mut() = Some(Interval::new(TICK_MS, move || {
                        elapsed.set(elapsed.get() + f64::from(TICK_MS));
                        let at = (elapsed.get() / COUNT_UP_DURATION_MS).min(1.0);
                        progress.set(at);
                    }));
                    // The ticker cannot cancel itself from inside its own
                    // callback, so a companion timeout retires it once the
                    // animation has landed.
                    let ticker_handle = ticker.clone();
                    stop = Some(Timeout::new(
                        COUNT_UP_DURATION_MS as u32 + TICK_MS,
                        move || {
                            ticker_handle.borrow_mut().take();
                        },
                    ));
                }
                move || {
                    drop(stop);
                    ticker.borrow_mut().take();
                }
            },
            revealed,
        );
    }

    let section_class = classes!("stats", revealed.then_some("stats--visible"));

    html! {
        <section class={section_class} id="stats">
            <div class="stats__container">
                { for STATS.iter().map(|stat| html! {
                    <div key={stat.label} class="stats__item">
                        <div class="stats__item-value">
                            {stat.prefix}
                            { count_at(stat.value, *progress) }
                            {stat.suffix}
                        </div>
                        <div class="stats__item-label">{stat.label}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_ends() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn easing_front_loads_the_motion() {
        // Cubic ease-out covers most of the distance in the first half.
        assert!(ease_out_cubic(0.5) > 0.8);
    }

    #[test]
    fn count_starts_at_zero_and_lands_on_target() {
        for stat in &STATS {
            assert_eq!(count_at(stat.value, 0.0), 0);
            assert_eq!(count_at(stat.value, 1.0), stat.value);
        }
    }

    #[test]
    fn count_clamps_out_of_range_progress() {
        assert_eq!(count_at(98, -0.5), 0);
        assert_eq!(count_at(98, 1.5), 98);
    }

    #[test]
    fn count_never_moves_backwards() {
        let mut previous = 0;
        for step in 0..=50 {
            let current = count_at(72, f64::from(step) / 50.0);
            assert!(current >= previous);
            previous = current;
        }
    }
}
