//! Hooks that tie sections, card grids, and stat numbers to the
//! viewport. Under `prefers-reduced-motion` everything collapses to
//! its final state with no delays and no count-up.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::behavior::counter::{parse_target, CountFrame, CountTarget, CountUp, TICK_MS};
use crate::behavior::reveal::{RevealRepeat, Stagger};
use crate::frontend::{dom, observe::Observer};

const SECTION_THRESHOLD: f64 = 0.1;
// Fires roughly 100px before the section edge enters the viewport.
const SECTION_LEAD_MARGIN: &str = "-100px 0px";
const CARD_THRESHOLD: f64 = 0.2;
const STAT_THRESHOLD: f64 = 0.5;

/// Marks the section `visible` the first time it approaches the
/// viewport. The class is permanent; scrolling back up never hides a
/// section again.
#[hook]
pub fn use_section_reveal(section: NodeRef) {
    use_effect_with((), move |_| {
        let observer = section.cast::<Element>().and_then(|element| {
            if dom::prefers_reduced_motion() {
                let _ = element.class_list().add_1("visible");
                return None;
            }
            let observer = Observer::new(
                SECTION_THRESHOLD,
                Some(SECTION_LEAD_MARGIN),
                RevealRepeat::Once,
                |target, _| {
                    let _ = target.class_list().add_1("visible");
                },
            )?;
            observer.observe(&element);
            Some(observer)
        });
        move || drop(observer)
    });
}

/// Pre-hides the container's children, then slides each one in after
/// its stagger delay every time it enters the viewport. Re-entries
/// re-apply the same visible state, which is a no-op on screen.
#[hook]
pub fn use_card_reveal(container: NodeRef, stagger: Stagger) {
    use_effect_with((), move |_| {
        let observer = container.cast::<Element>().and_then(|element| {
            if dom::prefers_reduced_motion() {
                return None;
            }
            hide_children(&element);
            let observer =
                Observer::new(CARD_THRESHOLD, None, RevealRepeat::EveryEntry, move |card, index| {
                    let delay = stagger.delay_ms(index);
                    let show = move || {
                        let style = card.style();
                        let _ = style.set_property("opacity", "1");
                        let _ = style.set_property("transform", "translateY(0)");
                    };
                    if delay == 0 {
                        show();
                    } else {
                        Timeout::new(delay, show).forget();
                    }
                })?;
            observer.observe_children(&element);
            Some(observer)
        });
        move || drop(observer)
    });
}

fn hide_children(container: &Element) {
    let children = container.children();
    for index in 0..children.length() {
        let Some(card) = children
            .item(index)
            .and_then(|child| child.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let style = card.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(30px)");
        let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
    }
}

/// Counts up each `.stat-number` under the container once, the first
/// time at least half of it is visible. Unobserving on first entry is
/// what makes the once-per-page-load guarantee hold.
#[hook]
pub fn use_stat_counters(container: NodeRef) {
    use_effect_with((), move |_| {
        let observer = container.cast::<Element>().and_then(|element| {
            let reduced_motion = dom::prefers_reduced_motion();
            let observer = Observer::new(STAT_THRESHOLD, None, RevealRepeat::Once, move |stat, _| {
                let text = stat.text_content().unwrap_or_default();
                match parse_target(text.trim()) {
                    CountTarget::Literal(_) => {}
                    CountTarget::Animated(count) if reduced_motion => {
                        stat.set_text_content(Some(count.final_text()));
                    }
                    CountTarget::Animated(count) => run_count_up(stat, count),
                }
            })?;
            observer.observe_matching(&element, ".stat-number");
            Some(observer)
        });
        move || drop(observer)
    });
}

/// The interval cancels itself on the final frame by dropping its own
/// handle out of the shared slot.
fn run_count_up(stat: HtmlElement, mut count: CountUp) {
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let timer = {
        let slot = Rc::clone(&slot);
        Interval::new(TICK_MS, move || match count.tick() {
            CountFrame::Running(text) => stat.set_text_content(Some(&text)),
            CountFrame::Done(text) => {
                stat.set_text_content(Some(&text));
                slot.borrow_mut().take();
            }
        })
    };
    *slot.borrow_mut() = Some(timer);
}
