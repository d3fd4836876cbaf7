use yew::prelude::*;
use yew::html::Scope;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use log::debug;

use crate::device;
use crate::preview::sequencer::{
    SendOutcome, Scheduler, Sequencer, Side, Ticket, MAX_DRAFT_CHARS,
};

struct Subject {
    filename: &'static str,
    image: &'static str,
}

const LEFT: Subject = Subject {
    filename: "summer-hero-v1.png",
    image: "/assets/compare/summer-hero-v1.jpg",
};

const RIGHT: Subject = Subject {
    filename: "summer-hero-v2.png",
    image: "/assets/compare/summer-hero-v2.jpg",
};

fn subject(side: Side) -> &'static Subject {
    match side {
        Side::Left => &LEFT,
        Side::Right => &RIGHT,
    }
}

pub enum Msg {
    Fire(Ticket),
    Focus(Side),
    EditDraft(String),
    Send,
    Interrupt,
}

#[derive(Properties, PartialEq)]
pub struct ComparePreviewProps {
    /// Emitted when a guest tries to reply to a thread that already has their comment.
    pub on_sign_up: Callback<()>,
}

/// Browser timers for the sequencer. Dropping a `Timeout` clears it.
pub struct TimeoutScheduler {
    link: Scope<ComparePreview>,
    pending: Vec<Timeout>,
}

impl TimeoutScheduler {
    fn new(link: Scope<ComparePreview>) -> Self {
        Self {
            link,
            pending: Vec::new(),
        }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, delay_ms: u32, ticket: Ticket) {
        let link = self.link.clone();
        self.pending.push(Timeout::new(delay_ms, move || {
            link.send_message(Msg::Fire(ticket));
        }));
    }

    fn cancel_all(&mut self) {
        self.pending.clear();
    }
}

pub struct ComparePreview {
    sequencer: Sequencer,
    timers: TimeoutScheduler,
}

impl Component for ComparePreview {
    type Message = Msg;
    type Properties = ComparePreviewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let autoplay = !device::is_touch_primary();
        if !autoplay {
            debug!("touch-primary device, compare preview will not autoplay");
        }

        let mut timers = TimeoutScheduler::new(ctx.link().clone());
        let mut sequencer = Sequencer::new(autoplay);
        sequencer.mount(&mut timers);

        Self { sequencer, timers }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fire(ticket) => self.sequencer.fire(ticket, &mut self.timers),
            Msg::Focus(side) => {
                self.sequencer.focus(side, &mut self.timers);
                true
            }
            Msg::EditDraft(text) => {
                self.sequencer.edit_draft(&text, &mut self.timers);
                true
            }
            Msg::Send => match self.sequencer.send(&mut self.timers) {
                SendOutcome::Sent | SendOutcome::Empty => true,
                SendOutcome::SignUpRequired => {
                    ctx.props().on_sign_up.emit(());
                    true
                }
            },
            Msg::Interrupt => self.sequencer.interrupt(&mut self.timers),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.sequencer.state();
        let active = subject(state.active_side);

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::EditDraft(input.value())
        });
        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                Some(Msg::Send)
            } else {
                None
            }
        });
        let onsend = ctx.link().callback(|e: MouseEvent| {
            e.prevent_default();
            Msg::Send
        });

        html! {
            <div
                class="compare-preview"
                onclick={ctx.link().callback(|_: MouseEvent| Msg::Interrupt)}
                onkeydown={ctx.link().callback(|_: KeyboardEvent| Msg::Interrupt)}
            >
                <style>
                    {r#"
                        .compare-preview {
                            position: relative;
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                            padding: 1.5rem;
                            background: rgba(30, 30, 30, 0.7);
                            border: 1px solid rgba(255, 122, 69, 0.15);
                            border-radius: 16px;
                        }
                        .compare-panels {
                            display: grid;
                            grid-template-columns: 1fr 1fr;
                            gap: 1rem;
                        }
                        .compare-panel {
                            border: 2px solid transparent;
                            border-radius: 12px;
                            overflow: hidden;
                            background: #1a1a1a;
                            transition: border-color 0.3s ease;
                        }
                        .compare-panel.active {
                            border-color: #ff7a45;
                        }
                        .compare-panel-header {
                            width: 100%;
                            padding: 0.6rem 0.9rem;
                            background: none;
                            border: none;
                            color: #ddd;
                            text-align: left;
                            cursor: pointer;
                            font-size: 0.9rem;
                        }
                        .compare-panel img {
                            width: 100%;
                            display: block;
                            aspect-ratio: 4 / 3;
                            object-fit: cover;
                        }
                        .compare-comment {
                            margin: 0.75rem;
                            padding: 0.6rem 0.8rem;
                            background: rgba(255, 255, 255, 0.06);
                            border-radius: 10px;
                            color: #eee;
                            font-size: 0.85rem;
                            animation: fadeIn 0.3s ease-in-out;
                        }
                        .compare-comment-author {
                            display: block;
                            color: #999;
                            font-size: 0.75rem;
                            margin-bottom: 0.2rem;
                        }
                        .compare-composer {
                            display: flex;
                            gap: 0.5rem;
                        }
                        .compare-composer input {
                            flex: 1;
                            padding: 0.6rem 0.8rem;
                            border-radius: 8px;
                            border: 1px solid #333;
                            background: #111;
                            color: #fff;
                        }
                        .compare-composer button {
                            padding: 0.6rem 1.2rem;
                            border-radius: 8px;
                            border: none;
                            background: #ff7a45;
                            color: #fff;
                            cursor: pointer;
                        }
                        .compare-autoplay-badge {
                            position: absolute;
                            top: 0.5rem;
                            right: 0.75rem;
                            color: #999;
                            font-size: 0.75rem;
                        }
                        @keyframes fadeIn {
                            from { opacity: 0; }
                            to { opacity: 1; }
                        }
                        @media (max-width: 700px) {
                            .compare-panels {
                                grid-template-columns: 1fr;
                            }
                        }
                    "#}
                </style>
                if self.sequencer.is_autoplaying() {
                    <span class="compare-autoplay-badge">{"▶ Demo playing, click anywhere to try it"}</span>
                }
                <div class="compare-panels">
                    { self.render_panel(ctx, Side::Left) }
                    { self.render_panel(ctx, Side::Right) }
                </div>
                <div class="compare-composer">
                    <input
                        type="text"
                        maxlength={MAX_DRAFT_CHARS.to_string()}
                        placeholder={format!("Comment on {}", active.filename)}
                        value={state.draft.clone()}
                        oninput={oninput}
                        onkeydown={onkeydown}
                    />
                    <button onclick={onsend}>{"Send"}</button>
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.sequencer.teardown(&mut self.timers);
    }
}

impl ComparePreview {
    fn render_panel(&self, ctx: &Context<Self>, side: Side) -> Html {
        let state = self.sequencer.state();
        let subject = subject(side);
        let onclick = ctx.link().callback(move |_: MouseEvent| Msg::Focus(side));

        html! {
            <div class={classes!("compare-panel", (state.active_side == side).then(|| "active"))}>
                <button class="compare-panel-header" onclick={onclick}>
                    {subject.filename}
                </button>
                <img src={subject.image} alt={subject.filename} loading="lazy" />
                {
                    if let Some(comment) = state.comment(side) {
                        html! {
                            <div class="compare-comment">
                                <span class="compare-comment-author">{"Guest"}</span>
                                {comment}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
