//! The work grid, its category filter, and the modals the cards open
//! into.

use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::behavior::filter::{Category, Selection};
use crate::behavior::preview::{self, PreviewTrigger};
use crate::behavior::reveal::Stagger;
use crate::frontend::modal::{
    DocumentModal, DocumentModalAction, DocumentModalState, ImageModal, ImageModalAction,
    ImageModalState, ImageView,
};
use crate::frontend::{dom, reveal};

#[derive(Clone, Copy, PartialEq)]
enum CardMedia {
    Image(&'static str),
    Document(&'static str),
}

#[derive(Clone, Copy, PartialEq)]
struct WorkItem {
    title: &'static str,
    blurb: &'static str,
    category: Category,
    media: CardMedia,
}

const WORK_ITEMS: [WorkItem; 6] = [
    WorkItem {
        title: "Harbor & Co. identity",
        blurb: "Full rebrand for a Copenhagen coffee roaster.",
        category: Category::Branding,
        media: CardMedia::Image("assets/work/harbor-identity.jpg"),
    },
    WorkItem {
        title: "Foundry webshop",
        blurb: "Storefront design and build for a type foundry.",
        category: Category::Web,
        media: CardMedia::Image("assets/work/foundry-webshop.jpg"),
    },
    WorkItem {
        title: "Atlas annual report",
        blurb: "A 64-page print report, art direction to press.",
        category: Category::Print,
        media: CardMedia::Document("assets/docs/atlas-annual-report.docx"),
    },
    WorkItem {
        title: "Mikkel & Sons packaging",
        blurb: "Label system across a twelve-bottle range.",
        category: Category::Print,
        media: CardMedia::Image("assets/work/mikkel-packaging.jpg"),
    },
    WorkItem {
        title: "Beacon brand guidelines",
        blurb: "Guideline deck handed over to an in-house team.",
        category: Category::Branding,
        media: CardMedia::Document("assets/docs/beacon-brand-guidelines.pptx"),
    },
    WorkItem {
        title: "Lumen marketing site",
        blurb: "Launch site for a lighting studio, designed and built here.",
        category: Category::Web,
        media: CardMedia::Image("assets/work/lumen-site.jpg"),
    },
];

const FILTERS: [Selection; 4] = [
    Selection::All,
    Selection::Only(Category::Branding),
    Selection::Only(Category::Web),
    Selection::Only(Category::Print),
];

/// `None` when the page runs from a local context (or the origin is
/// unreadable); such an open goes straight to the download fallback.
fn remote_embed_url(file: &str) -> Option<String> {
    let location = dom::page_location()?;
    let hostname = location.hostname().ok()?;
    let protocol = location.protocol().ok()?;
    if preview::is_local_context(&hostname, &protocol) {
        return None;
    }
    let origin = location.origin().ok()?;
    Some(preview::viewer_embed_url(&origin, file))
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let section_ref = use_node_ref();
    let grid_ref = use_node_ref();
    reveal::use_section_reveal(section_ref.clone());
    reveal::use_card_reveal(grid_ref.clone(), Stagger::Columns { columns: 3, step_ms: 100 });

    // Stays `None` until the first filter interaction so the replay
    // animation does not fight the initial staggered reveal.
    let selection = use_state(|| None::<Selection>);
    let image_modal = use_reducer(ImageModalState::default);
    let document_modal = use_reducer(DocumentModalState::default);

    // Whichever modal is open holds the page scroll.
    {
        let image_open = image_modal.view.is_some();
        let document_open = document_modal.view.is_some();
        use_effect_with((image_open, document_open), |&(image_open, document_open)| {
            dom::lock_body_scroll(image_open || document_open);
            || ()
        });
    }

    // Escape closes whichever modal is open; with none open the
    // dispatches are no-ops.
    {
        let image_modal = image_modal.clone();
        let document_modal = document_modal.clone();
        use_effect_with((), move |_| {
            let listener = dom::KeydownListener::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    image_modal.dispatch(ImageModalAction::Close);
                    document_modal.dispatch(DocumentModalAction::Close);
                }
            });
            move || drop(listener)
        });
    }

    let open_item = {
        let image_modal = image_modal.clone();
        let document_modal = document_modal.clone();
        move |item: WorkItem| {
            let image_modal = image_modal.clone();
            let document_modal = document_modal.clone();
            Callback::from(move |_: MouseEvent| match item.media {
                CardMedia::Image(src) => {
                    image_modal.dispatch(ImageModalAction::Open(ImageView { src, title: item.title }));
                }
                CardMedia::Document(file) => {
                    log::debug!("opening document preview for {file}");
                    document_modal.dispatch(DocumentModalAction::Open {
                        file,
                        title: item.title,
                        embed_url: remote_embed_url(file),
                    });
                }
            })
        }
    };

    let current = (*selection).unwrap_or_default();
    let pick = {
        let selection = selection.clone();
        move |choice: Selection| {
            let selection = selection.clone();
            Callback::from(move |_: MouseEvent| selection.set(Some(choice)))
        }
    };

    let close_image = {
        let image_modal = image_modal.clone();
        Callback::from(move |()| image_modal.dispatch(ImageModalAction::Close))
    };
    let close_document = {
        let document_modal = document_modal.clone();
        Callback::from(move |()| document_modal.dispatch(DocumentModalAction::Close))
    };
    let resolve_document = {
        let document_modal = document_modal.clone();
        Callback::from(move |(generation, trigger): (u64, PreviewTrigger)| {
            document_modal.dispatch(DocumentModalAction::Resolve { generation, trigger });
        })
    };

    html! {
        <section id="portfolio" class="section" ref={section_ref}>
            <div class="section-heading">
                <h2>{"Selected work"}</h2>
                <p>{"A cut of what has left the studio lately."}</p>
            </div>
            <div class="filter-bar" role="group" aria-label="Filter work by category">
                { for FILTERS.iter().map(|&choice| html! {
                    <button
                        type="button"
                        key={choice.label()}
                        class={classes!("filter-btn", (current == choice).then_some("active"))}
                        onclick={pick(choice)}
                    >
                        {choice.label()}
                    </button>
                }) }
            </div>
            <div class="portfolio-grid" ref={grid_ref}>
                { for WORK_ITEMS.iter().map(|&item| {
                    let shown = current.shows(item.category);
                    let replay = selection.is_some() && shown;
                    html! {
                        <article
                            key={item.title}
                            class={classes!("portfolio-card", (!shown).then_some("hidden"))}
                            style={replay.then(|| "animation: fadeInUp 0.5s ease forwards".to_string())}
                            onclick={open_item(item)}
                        >
                            { match item.media {
                                CardMedia::Image(src) => html! {
                                    <img class="portfolio-thumb" src={src} alt={item.title} loading="lazy" />
                                },
                                CardMedia::Document(_) => html! {
                                    <div class="portfolio-thumb portfolio-thumb-doc" aria-hidden="true">
                                        {"\u{1f4c4}"}
                                    </div>
                                },
                            } }
                            <h3 class="portfolio-title">{item.title}</h3>
                            <p class="portfolio-blurb">{item.blurb}</p>
                            <span class="portfolio-tag">{item.category.label()}</span>
                        </article>
                    }
                }) }
            </div>

            <ImageModal view={image_modal.view} on_close={close_image} />
            <DocumentModal
                view={document_modal.view.clone()}
                on_close={close_document}
                on_resolve={resolve_document}
            />
        </section>
    }
}
