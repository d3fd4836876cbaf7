use yew::prelude::*;
use web_sys::Element;
use log::{debug, info};

use crate::preview::reorder::{
    ContentKind, DragGesture, KeyOutcome, KeyboardDrag, Release, Version, VersionList,
};

pub enum Msg {
    PointerDown { id: String, x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerEnter(String),
    PointerLeave,
    PointerUp,
    PointerCancel,
    Key { id: String, key: String },
    Blur(String),
    MarkActive(String),
    Remove(String),
    ThumbnailFailed(String),
}

pub struct VersioningPreview {
    list: VersionList,
    gesture: DragGesture,
    keys: KeyboardDrag,
}

impl Component for VersioningPreview {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            list: VersionList::seeded(),
            gesture: DragGesture::default(),
            keys: KeyboardDrag::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PointerDown { id, x, y } => {
                self.gesture.press(&id, x, y);
                false
            }
            Msg::PointerMove { x, y } => {
                if self.gesture.pointer_moved(x, y) {
                    self.list.close_menu();
                    return true;
                }
                false
            }
            Msg::PointerEnter(id) => self.gesture.hover(Some(&id)),
            Msg::PointerLeave => self.gesture.leave(),
            Msg::PointerUp => match self.gesture.release() {
                Release::Click(id) => {
                    self.list.toggle_menu(&id);
                    true
                }
                Release::Drop(end) => {
                    if self.list.on_drag_end(&end) {
                        debug!("moved version {} onto {:?}", end.source, end.destination);
                    }
                    true
                }
                Release::Nothing => false,
            },
            Msg::PointerCancel => self.gesture.cancel(),
            Msg::Key { id, key } => match self.keys.key(&key, &id, self.list.items()) {
                KeyOutcome::Ignored => false,
                KeyOutcome::Dropped(end) => {
                    self.list.on_drag_end(&end);
                    true
                }
                KeyOutcome::Lifted | KeyOutcome::Moved | KeyOutcome::Cancelled => true,
            },
            Msg::Blur(id) => self.keys.lifted() == Some(id.as_str()) && self.keys.cancel(),
            Msg::MarkActive(id) => self.list.mark_active(&id),
            Msg::Remove(id) => self.list.remove(&id),
            Msg::ThumbnailFailed(id) => {
                let first = self.list.thumbnail_failed(&id);
                if first {
                    info!("thumbnail for {} failed to load, showing placeholder", id);
                }
                first
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div
                class={classes!("versioning-preview", self.gesture.dragging().is_some().then(|| "is-dragging"))}
                onpointermove={link.callback(|e: PointerEvent| Msg::PointerMove {
                    x: f64::from(e.client_x()),
                    y: f64::from(e.client_y()),
                })}
                onpointerup={link.callback(|_: PointerEvent| Msg::PointerUp)}
                onpointerleave={link.callback(|_: PointerEvent| Msg::PointerLeave)}
                onpointercancel={link.callback(|_: PointerEvent| Msg::PointerCancel)}
            >
                <style>
                    {r#"
                        .versioning-preview {
                            display: flex;
                            flex-direction: column;
                            gap: 0.5rem;
                            padding: 1rem;
                            background: rgba(30, 30, 30, 0.7);
                            border: 1px solid rgba(255, 122, 69, 0.15);
                            border-radius: 16px;
                            user-select: none;
                        }
                        .versioning-preview.is-dragging {
                            cursor: grabbing;
                        }
                        .version-row {
                            position: relative;
                            display: flex;
                            align-items: center;
                            gap: 0.9rem;
                            padding: 0.6rem;
                            border-radius: 10px;
                            background: #1a1a1a;
                            border: 1px solid transparent;
                            touch-action: none;
                            cursor: grab;
                            transition: border-color 0.2s ease, opacity 0.2s ease;
                        }
                        .version-row:focus-visible {
                            outline: 2px solid #ff7a45;
                        }
                        .version-row.dragging {
                            opacity: 0.5;
                        }
                        .version-row.drop-target {
                            border-color: #ff7a45;
                        }
                        .version-thumb {
                            width: 64px;
                            height: 48px;
                            border-radius: 6px;
                            object-fit: cover;
                            flex-shrink: 0;
                        }
                        .version-thumb.placeholder {
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            background: #2a2a2a;
                            color: #aaa;
                            font-size: 1.4rem;
                        }
                        .version-thumb.placeholder .play-overlay {
                            width: 26px;
                            height: 26px;
                            border-radius: 50%;
                            background: rgba(0, 0, 0, 0.6);
                            color: #fff;
                            font-size: 0.8rem;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                        }
                        .version-meta {
                            display: flex;
                            flex-direction: column;
                            color: #ddd;
                            font-size: 0.85rem;
                            min-width: 0;
                        }
                        .version-meta .filename {
                            white-space: nowrap;
                            overflow: hidden;
                            text-overflow: ellipsis;
                        }
                        .version-meta .size {
                            color: #888;
                            font-size: 0.75rem;
                        }
                        .version-label {
                            font-weight: bold;
                            color: #fff;
                            min-width: 2rem;
                        }
                        .version-active {
                            margin-left: auto;
                            padding: 0.15rem 0.5rem;
                            border-radius: 999px;
                            background: rgba(255, 122, 69, 0.2);
                            color: #ff7a45;
                            font-size: 0.7rem;
                        }
                        .version-menu {
                            position: absolute;
                            right: 0.5rem;
                            top: calc(100% - 0.25rem);
                            z-index: 5;
                            display: flex;
                            flex-direction: column;
                            background: #222;
                            border: 1px solid #333;
                            border-radius: 8px;
                            overflow: hidden;
                        }
                        .version-menu button {
                            padding: 0.5rem 1rem;
                            background: none;
                            border: none;
                            color: #ddd;
                            text-align: left;
                            cursor: pointer;
                        }
                        .version-menu button:disabled {
                            color: #555;
                            cursor: default;
                        }
                    "#}
                </style>
                { for self.list.items().iter().enumerate().map(|(index, version)| self.render_row(ctx, index, version)) }
            </div>
        }
    }
}

impl VersioningPreview {
    fn render_row(&self, ctx: &Context<Self>, index: usize, version: &Version) -> Html {
        let link = ctx.link();
        let id = version.id.clone();

        let dragging = self.gesture.dragging() == Some(id.as_str())
            || self.keys.lifted() == Some(id.as_str());
        let drop_target = (self.gesture.dragging().is_some()
            && self.gesture.over() == Some(id.as_str())
            && !dragging)
            || (self.keys.target() == Some(index) && self.keys.lifted() != Some(id.as_str()));

        let onpointerdown = {
            let id = id.clone();
            link.batch_callback(move |e: PointerEvent| {
                if !e.is_primary() || e.button() != 0 {
                    return None;
                }
                // Touch pointers are captured by the pressed row by default, which
                // would hide every other row from pointerenter.
                if let Some(target) = e.target_dyn_into::<Element>() {
                    let _ = target.release_pointer_capture(e.pointer_id());
                }
                Some(Msg::PointerDown {
                    id: id.clone(),
                    x: f64::from(e.client_x()),
                    y: f64::from(e.client_y()),
                })
            })
        };
        let onpointerenter = {
            let id = id.clone();
            link.callback(move |_: PointerEvent| Msg::PointerEnter(id.clone()))
        };
        let onkeydown = {
            let id = id.clone();
            link.batch_callback(move |e: KeyboardEvent| {
                let key = e.key();
                if matches!(key.as_str(), " " | "Enter" | "ArrowUp" | "ArrowDown" | "Escape") {
                    e.prevent_default();
                    Some(Msg::Key { id: id.clone(), key })
                } else {
                    None
                }
            })
        };

        let onblur = {
            let id = id.clone();
            link.callback(move |_: FocusEvent| Msg::Blur(id.clone()))
        };

        html! {
            <div
                key={version.id.clone()}
                class={classes!("version-row", dragging.then(|| "dragging"), drop_target.then(|| "drop-target"))}
                tabindex="0"
                role="listitem"
                aria-grabbed={dragging.to_string()}
                onpointerdown={onpointerdown}
                onpointerenter={onpointerenter}
                onkeydown={onkeydown}
                onblur={onblur}
            >
                { self.render_thumbnail(ctx, version) }
                <span class="version-label">{&version.label}</span>
                <div class="version-meta">
                    <span class="filename">{&version.filename}</span>
                    <span class="size">{&version.size}</span>
                </div>
                if version.is_active {
                    <span class="version-active">{"Active"}</span>
                }
                if self.list.open_menu() == Some(id.as_str()) {
                    { self.render_menu(ctx, version) }
                }
            </div>
        }
    }

    fn render_thumbnail(&self, ctx: &Context<Self>, version: &Version) -> Html {
        if self.list.shows_placeholder(&version.id) {
            return match version.kind() {
                ContentKind::Document => html! {
                    <div class="version-thumb placeholder document">{"📄"}</div>
                },
                ContentKind::Video => html! {
                    <div class="version-thumb placeholder video">
                        <span class="play-overlay">{"▶"}</span>
                    </div>
                },
            };
        }

        let id = version.id.clone();
        html! {
            <img
                class="version-thumb"
                src={version.thumbnail_url.clone()}
                alt={version.filename.clone()}
                loading="lazy"
                draggable="false"
                onerror={ctx.link().callback(move |_: Event| Msg::ThumbnailFailed(id.clone()))}
            />
        }
    }

    fn render_menu(&self, ctx: &Context<Self>, version: &Version) -> Html {
        let link = ctx.link();
        let mark_active = {
            let id = version.id.clone();
            link.callback(move |_: MouseEvent| Msg::MarkActive(id.clone()))
        };
        let remove = {
            let id = version.id.clone();
            link.callback(move |_: MouseEvent| Msg::Remove(id.clone()))
        };
        // Keep presses and keys inside the menu away from the row's drag handling.
        let stop_pointer = Callback::from(|e: PointerEvent| e.stop_propagation());
        let stop_keys = Callback::from(|e: KeyboardEvent| e.stop_propagation());

        html! {
            <div class="version-menu" role="menu" onpointerdown={stop_pointer} onkeydown={stop_keys}>
                <button onclick={mark_active} disabled={version.is_active}>{"Mark as active"}</button>
                <button onclick={remove} disabled={self.list.items().len() <= 1}>{"Remove"}</button>
            </div>
        }
    }
}
