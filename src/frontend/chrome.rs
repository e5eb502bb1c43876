//! Fixed header: condensed-on-scroll styling, the active-section
//! highlighter, the mobile menu, and in-page navigation.

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::behavior::chrome::{active_section, header_is_scrolled, nav_probe_position, SectionBounds};
use crate::frontend::{dom, PageChrome};

/// Ordered id → label table. It both renders the nav links and drives
/// the highlighter, so the two cannot fall out of step.
pub const NAV_SECTIONS: [(&str, &str); 6] = [
    ("about", "About"),
    ("services", "Services"),
    ("portfolio", "Work"),
    ("projects", "Projects"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub chrome: PageChrome,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scrolled = use_state(|| false);
    let active = use_state(|| None::<&'static str>);
    let menu_open = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        let chrome = props.chrome.clone();
        use_effect_with((), move |_| {
            let update = move || {
                let scroll_y = dom::scroll_y();
                scrolled.set(header_is_scrolled(scroll_y));

                let probe = nav_probe_position(scroll_y, chrome.header_height());
                let bounds: Vec<SectionBounds<'static>> = NAV_SECTIONS
                    .iter()
                    .filter_map(|&(id, _)| {
                        dom::section_bounds(id)
                            .map(|(top, bottom)| SectionBounds { id, top, bottom })
                    })
                    .collect();
                active.set(active_section(probe, &bounds));
            };
            // Reloading mid-page must not leave the header transparent.
            update();
            let listener = dom::WindowListener::new("scroll", update);
            move || drop(listener)
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*menu_open;
            dom::lock_body_scroll(next);
            menu_open.set(next);
        })
    };

    let nav_link = |id: &'static str| {
        let menu_open = menu_open.clone();
        let chrome = props.chrome.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            dom::lock_body_scroll(false);
            menu_open.set(false);
            chrome.scroll_to_section(id);
        })
    };

    html! {
        <header id="header" ref={props.chrome.header.clone()}
            class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
            <div class="header-inner">
                <span class="brand">{"Northlight Studio"}</span>
                <nav id="nav" class={classes!("site-nav", (*menu_open).then_some("active"))}>
                    { for NAV_SECTIONS.iter().map(|&(id, label)| html! {
                        <a
                            key={id}
                            class={classes!("nav-link", (*active == Some(id)).then_some("active"))}
                            href={format!("#{id}")}
                            onclick={nav_link(id)}
                        >
                            {label}
                        </a>
                    }) }
                    <a class="nav-link nav-link-accent" href="#contact" onclick={nav_link("contact")}>
                        {"Start a project"}
                    </a>
                </nav>
                <button
                    type="button"
                    class={classes!("menu-toggle", (*menu_open).then_some("active"))}
                    aria-label="Toggle navigation"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span><span></span><span></span>
                </button>
            </div>
        </header>
    }
}
