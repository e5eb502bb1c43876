//! The page itself: one Yew app mounting the header chrome and the
//! content sections.

mod chrome;
mod contact;
mod dom;
mod modal;
mod observe;
mod portfolio;
mod reveal;

use log::Level;
use web_sys::{window, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::behavior::chrome::parallax_shift;
use crate::behavior::reveal::Stagger;
use chrome::Header;
use contact::ContactSection;
use portfolio::Portfolio;

/// Handles to the singleton chrome elements, created once at startup
/// and handed to every component that needs them.
#[derive(Clone, PartialEq)]
pub struct PageChrome {
    pub header: NodeRef,
}

impl PageChrome {
    pub fn header_height(&self) -> f64 {
        dom::element_height(&self.header)
    }

    /// Smooth-scrolls the viewport so the section lands just under the
    /// fixed header. Unknown anchors stay a visual no-op.
    pub fn scroll_to_section(&self, id: &str) {
        let Some((top, _)) = dom::section_bounds(id) else {
            log::debug!("anchor target #{id} is not on this page");
            return;
        };
        dom::smooth_scroll_to(top - self.header_height());
    }
}

fn anchor_callback(chrome: &PageChrome, id: &'static str) -> Callback<MouseEvent> {
    let chrome = chrome.clone();
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        chrome.scroll_to_section(id);
    })
}

#[function_component(App)]
fn app() -> Html {
    let header_ref = use_node_ref();
    let page = PageChrome { header: header_ref };

    html! {
        <>
            <Header chrome={page.clone()} />
            <main>
                <Hero chrome={page} />
                <About />
                <Services />
                <Portfolio />
                <Projects />
                <Testimonials />
                <ContactSection />
            </main>
            <Footer />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    chrome: PageChrome,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let section_ref = use_node_ref();
    let image_ref = use_node_ref();

    {
        let section = section_ref.clone();
        let image = image_ref.clone();
        use_effect_with((), move |_| {
            let update = move || {
                let Some(image) = image.cast::<HtmlElement>() else {
                    return;
                };
                let hero_height = section
                    .cast::<HtmlElement>()
                    .map(|element| f64::from(element.offset_height()))
                    .unwrap_or(0.0);
                match parallax_shift(dom::scroll_y(), dom::viewport_width(), hero_height) {
                    Some(shift) => {
                        let _ = image
                            .style()
                            .set_property("transform", &format!("translateY({shift}px)"));
                    }
                    None => {
                        let _ = image.style().remove_property("transform");
                    }
                }
            };
            update();
            let listener = dom::WindowListener::new("scroll", update);
            move || drop(listener)
        });
    }

    let view_work = anchor_callback(&props.chrome, "portfolio");
    let start_project = anchor_callback(&props.chrome, "contact");

    html! {
        <section class="hero" ref={section_ref}>
            <div class="hero-copy">
                <h1>{"Design that carries small companies a long way."}</h1>
                <p>
                    {"Northlight is a three-person studio in Aarhus shaping brands, \
                      websites, and print for people who make things."}
                </p>
                <div class="hero-actions">
                    <a class="button" href="#portfolio" onclick={view_work}>{"See the work"}</a>
                    <a class="button button-ghost" href="#contact" onclick={start_project}>
                        {"Start a project"}
                    </a>
                </div>
            </div>
            <div class="hero-image-wrapper" ref={image_ref}>
                <img src="assets/studio.jpg" alt="The Northlight studio space" />
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    let section_ref = use_node_ref();
    let stats_ref = use_node_ref();
    reveal::use_section_reveal(section_ref.clone());
    reveal::use_stat_counters(stats_ref.clone());

    html! {
        <section id="about" class="section" ref={section_ref}>
            <div class="section-heading">
                <h2>{"About the studio"}</h2>
            </div>
            <p class="about-lede">
                {"We have spent the last nine years helping founders say what they \
                  mean, wherever their customers happen to meet them."}
            </p>
            <div class="stats-row" ref={stats_ref}>
                <div class="stat">
                    <span class="stat-number">{"120+"}</span>
                    <span class="stat-label">{"projects shipped"}</span>
                </div>
                <div class="stat">
                    <span class="stat-number">{"98%"}</span>
                    <span class="stat-label">{"clients who came back"}</span>
                </div>
                <div class="stat">
                    <span class="stat-number">{"4.5/5"}</span>
                    <span class="stat-label">{"average partner rating"}</span>
                </div>
            </div>
        </section>
    }
}

struct Service {
    name: &'static str,
    blurb: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        name: "Brand identity",
        blurb: "Naming, marks, and the voice to go with them.",
    },
    Service {
        name: "Websites",
        blurb: "Designed and built in-house, fast and maintainable.",
    },
    Service {
        name: "Print",
        blurb: "Reports, packaging, and books that survive handling.",
    },
    Service {
        name: "Art direction",
        blurb: "Photography and illustration briefs that stay on brand.",
    },
];

#[function_component(Services)]
fn services() -> Html {
    let section_ref = use_node_ref();
    let grid_ref = use_node_ref();
    reveal::use_section_reveal(section_ref.clone());
    reveal::use_card_reveal(grid_ref.clone(), Stagger::Linear { step_ms: 100 });

    html! {
        <section id="services" class="section" ref={section_ref}>
            <div class="section-heading">
                <h2>{"What we do"}</h2>
            </div>
            <div class="service-grid" ref={grid_ref}>
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card" key={service.name}>
                        <h3>{service.name}</h3>
                        <p>{service.blurb}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

const PROJECTS: [(&str, &str); 3] = [
    (
        "Grid paper",
        "A plotter-ready sketch pad we print and give away each winter.",
    ),
    (
        "Type specimens",
        "Occasional one-page specimens for typefaces we admire.",
    ),
    (
        "Studio notes",
        "Short write-ups on process, tooling, and pricing.",
    ),
];

#[function_component(Projects)]
fn projects() -> Html {
    let section_ref = use_node_ref();
    reveal::use_section_reveal(section_ref.clone());

    html! {
        <section id="projects" class="section" ref={section_ref}>
            <div class="section-heading">
                <h2>{"Side projects"}</h2>
            </div>
            <div class="project-list">
                { for PROJECTS.iter().map(|&(name, blurb)| html! {
                    <div class="project-row" key={name}>
                        <h3>{name}</h3>
                        <p>{blurb}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "They asked better questions than our own board did.",
        "Ida Holm, Harbor & Co.",
    ),
    (
        "The site paid for itself before the invoice cleared.",
        "Jonas Friis, Foundry",
    ),
    (
        "Our report finally looks like the work it describes.",
        "Mette Lund, Atlas",
    ),
];

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let section_ref = use_node_ref();
    let grid_ref = use_node_ref();
    reveal::use_section_reveal(section_ref.clone());
    reveal::use_card_reveal(grid_ref.clone(), Stagger::Linear { step_ms: 150 });

    html! {
        <section id="testimonials" class="section" ref={section_ref}>
            <div class="section-heading">
                <h2>{"Kind words"}</h2>
            </div>
            <div class="testimonial-grid" ref={grid_ref}>
                { for TESTIMONIALS.iter().map(|&(quote, author)| html! {
                    <figure class="testimonial-card" key={author}>
                        <blockquote>{quote}</blockquote>
                        <figcaption>{author}</figcaption>
                    </figure>
                }) }
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{"Northlight Studio \u{00b7} Mejlgade 48, Aarhus"}</p>
        </footer>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    log::info!("starting frontend");

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
