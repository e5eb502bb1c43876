//! The image lightbox and the document viewer, plus the reducer state
//! both are driven by. A modal renders only while open, so closing the
//! document modal unmounts its preview frame and releases any
//! in-flight load with it.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

use crate::behavior::preview::{self, PreviewPhase, PreviewSession, PreviewTrigger};

#[derive(Clone, Copy, PartialEq)]
pub struct ImageView {
    pub src: &'static str,
    pub title: &'static str,
}

#[derive(Default, PartialEq)]
pub struct ImageModalState {
    pub view: Option<ImageView>,
}

pub enum ImageModalAction {
    Open(ImageView),
    Close,
}

impl Reducible for ImageModalState {
    type Action = ImageModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ImageModalAction::Open(view) => Rc::new(Self { view: Some(view) }),
            ImageModalAction::Close if self.view.is_none() => self,
            ImageModalAction::Close => Rc::new(Self { view: None }),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct DocumentView {
    pub file: &'static str,
    pub title: &'static str,
    pub embed_url: Option<String>,
    pub session: PreviewSession,
}

#[derive(Default, PartialEq)]
pub struct DocumentModalState {
    pub view: Option<DocumentView>,
    opened: u64,
}

pub enum DocumentModalAction {
    /// `embed_url` is `None` in local contexts; such an open starts on
    /// the download fallback and never touches the network.
    Open {
        file: &'static str,
        title: &'static str,
        embed_url: Option<String>,
    },
    Resolve {
        generation: u64,
        trigger: PreviewTrigger,
    },
    Close,
}

impl Reducible for DocumentModalState {
    type Action = DocumentModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DocumentModalAction::Open { file, title, embed_url } => {
                let generation = self.opened + 1;
                let session = PreviewSession::open(generation, embed_url.is_none());
                Rc::new(Self {
                    view: Some(DocumentView { file, title, embed_url, session }),
                    opened: generation,
                })
            }
            DocumentModalAction::Resolve { generation, trigger } => {
                let Some(view) = self.view.as_ref() else { return self };
                let session = view.session.resolved(generation, trigger);
                if session == view.session {
                    return self;
                }
                Rc::new(Self {
                    view: Some(DocumentView { session, ..view.clone() }),
                    opened: self.opened,
                })
            }
            DocumentModalAction::Close if self.view.is_none() => self,
            DocumentModalAction::Close => Rc::new(Self {
                view: None,
                opened: self.opened,
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageModalProps {
    pub view: Option<ImageView>,
    pub on_close: Callback<()>,
}

#[function_component(ImageModal)]
pub fn image_modal(props: &ImageModalProps) -> Html {
    let Some(view) = props.view.as_ref() else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal image-modal active" role="dialog" aria-modal="true">
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="modal-content">
                <button type="button" class="modal-close" aria-label="Close" onclick={close}>
                    {"\u{00d7}"}
                </button>
                <h3 class="modal-title">{view.title}</h3>
                <img class="modal-image" src={view.src} alt={view.title} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DocumentModalProps {
    pub view: Option<DocumentView>,
    pub on_close: Callback<()>,
    pub on_resolve: Callback<(u64, PreviewTrigger)>,
}

#[function_component(DocumentModal)]
pub fn document_modal(props: &DocumentModalProps) -> Html {
    // Arm the fallback timer for as long as this open keeps loading.
    // The generation keeps a timer from one open away from the next,
    // and leaving the Loading phase drops the timer early.
    let armed = props.view.as_ref().and_then(|view| {
        (view.session.phase == PreviewPhase::Loading).then_some(view.session.generation)
    });
    {
        let on_resolve = props.on_resolve.clone();
        use_effect_with(armed, move |armed: &Option<u64>| {
            let timer = (*armed).map(|generation| {
                Timeout::new(preview::FALLBACK_DELAY_MS, move || {
                    on_resolve.emit((generation, PreviewTrigger::TimerElapsed));
                })
            });
            move || drop(timer)
        });
    }

    let Some(view) = props.view.as_ref() else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let frame_loaded = {
        let on_resolve = props.on_resolve.clone();
        let generation = view.session.generation;
        Callback::from(move |_: Event| on_resolve.emit((generation, PreviewTrigger::FrameLoaded)))
    };

    let loading = view.session.phase == PreviewPhase::Loading;
    let fallback = view.session.phase == PreviewPhase::Fallback;

    html! {
        <div class="modal document-modal active" role="dialog" aria-modal="true">
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="modal-content modal-content-wide">
                <button type="button" class="modal-close" aria-label="Close" onclick={close}>
                    {"\u{00d7}"}
                </button>
                <h3 class="modal-title">{view.title}</h3>
                <div class="document-surface">
                    if !fallback {
                        if let Some(embed_url) = view.embed_url.clone() {
                            <iframe
                                class="document-frame"
                                src={embed_url}
                                title={view.title}
                                onload={frame_loaded}
                            ></iframe>
                        }
                    }
                    <div class={classes!("document-loader", (!loading).then_some("hidden"))}>
                        <span class="spinner" aria-hidden="true"></span>
                        <p>{"Preparing preview\u{2026}"}</p>
                    </div>
                    <div class={classes!("document-fallback", fallback.then_some("active"))}>
                        <p>{"The online preview didn't come up, but the file itself is fine."}</p>
                        <a class="button" href={view.file} download="">{"Download the file"}</a>
                    </div>
                </div>
                <a class="button button-ghost" href={view.file} download="">{"Download"}</a>
            </div>
        </div>
    }
}
