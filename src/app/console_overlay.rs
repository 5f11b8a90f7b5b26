use std::sync::Arc;

use leptos::{ev::KeyboardEvent, html, prelude::*};

use super::{theme_toggle::ThemeContext, ViewContext};
use crate::{
    console::{CommandRes, Console, HistoryEntry},
    content::Portfolio,
    view_state::OverlayKind,
};

#[derive(Debug, Clone)]
struct TabState {
    opts: Arc<Vec<&'static str>>,
    index: usize,
}

#[derive(Debug, Clone)]
struct HistState {
    prefix: String,
    opts: Arc<Vec<String>>,
    index: usize,
}

/// The Ctrl+` console. Always mounted so the history survives closing it.
#[component]
pub fn CommandConsole(portfolio: &'static Portfolio) -> impl IntoView {
    let ctx = expect_context::<ViewContext>();
    let theme = expect_context::<ThemeContext>();
    let console = StoredValue::new(Console::new(portfolio));
    let input_ref = NodeRef::<html::Input>::new();
    let (history, set_history) = signal(Vec::<HistoryEntry>::new());
    let (tab_state, set_tab_state) = signal(None::<TabState>);
    let (hist_state, set_hist_state) = signal(None::<HistState>);

    let is_open = move || ctx.is_open(OverlayKind::CommandOverlay);

    Effect::new(move |_| {
        if is_open() {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let handle_cmd = move |cmd: String| {
        let Some(res) = console.try_update_value(|c| c.handle_command(&cmd)) else {
            return;
        };
        match res {
            CommandRes::Exit => ctx.close(OverlayKind::CommandOverlay),
            CommandRes::Matrix(_) => ctx.matrix.update(|m| *m = !*m),
            CommandRes::Theme(_) => theme.cycle(),
            CommandRes::Output(_) | CommandRes::Clear | CommandRes::Nothing => {}
        }
        console.with_value(|c| set_history.set(c.history().to_vec()));
    };

    let keydown_handler = move |ev: KeyboardEvent| {
        let Some(el) = input_ref.get_untracked() else {
            return;
        };
        if ev.meta_key() || ev.alt_key() || ev.ctrl_key() {
            return;
        }

        let is_tabbing = tab_state.get_untracked().is_some();
        let is_cycling_hist = hist_state.get_untracked().is_some();

        match ev.key().as_ref() {
            "ArrowUp" => {
                ev.prevent_default();
                if is_tabbing {
                    set_tab_state(None);
                }
                let HistState {
                    prefix,
                    opts,
                    index,
                } = match hist_state.get_untracked() {
                    Some(state) => state,
                    None => {
                        let prefix = el.value();
                        let opts = console.with_value(|c| c.handle_start_recall(&prefix));
                        let index = opts.len();
                        HistState {
                            prefix,
                            opts: opts.into(),
                            index,
                        }
                    }
                };
                if index == 0 {
                    return;
                }
                let index = index - 1;
                el.set_value(&opts[index]);
                set_hist_state(Some(HistState {
                    prefix,
                    opts,
                    index,
                }));
            }
            "ArrowDown" => {
                if is_tabbing {
                    set_tab_state(None);
                }
                let Some(HistState {
                    prefix,
                    opts,
                    index,
                }) = hist_state.get_untracked()
                else {
                    return;
                };
                ev.prevent_default();
                let index = index + 1;
                if index >= opts.len() {
                    el.set_value(&prefix);
                    set_hist_state(None);
                    return;
                }
                el.set_value(&opts[index]);
                set_hist_state(Some(HistState {
                    prefix,
                    opts,
                    index,
                }));
            }
            "Tab" => {
                let val = el.value();
                if val.trim().is_empty() {
                    return;
                }
                ev.prevent_default();
                if let Some(TabState { opts, index }) = tab_state.get_untracked() {
                    let index = if ev.shift_key() {
                        index.checked_sub(1).unwrap_or(opts.len() - 1)
                    } else {
                        (index + 1) % opts.len()
                    };
                    el.set_value(opts[index]);
                    set_tab_state(Some(TabState { opts, index }));
                    return;
                }
                let opts = console.with_value(|c| c.handle_start_tab(&val));
                match opts.len() {
                    0 => {}
                    1 => el.set_value(opts[0]),
                    _ => {
                        el.set_value(opts[0]);
                        set_tab_state(Some(TabState {
                            opts: opts.into(),
                            index: 0,
                        }));
                    }
                }
            }
            "Shift" => {}
            _ => {
                if is_tabbing {
                    set_tab_state(None);
                }
                if is_cycling_hist {
                    set_hist_state(None);
                }
            }
        }
    };

    view! {
        <div
            class=move || {
                if is_open() {
                    "fixed inset-x-4 bottom-4 md:inset-x-auto md:right-6 md:w-[36rem] z-50 rounded-xl bg-black/90 text-green-400 font-mono shadow-2xl border border-green-500/40"
                } else {
                    "hidden"
                }
            }
            role="dialog"
            aria-label="Command console"
        >
            <div class="flex items-center justify-between px-4 py-2 border-b border-green-500/30 text-xs">
                <span>"portfolio@terminal:~"</span>
                <button
                    type="button"
                    class="hover:text-white"
                    aria-label="Close console"
                    on:click=move |_| ctx.close(OverlayKind::CommandOverlay)
                >
                    "✕"
                </button>
            </div>
            <div class="flex flex-col-reverse max-h-80 overflow-y-auto p-4 text-sm">
                <pre class="whitespace-pre-wrap">
                    {move || {
                        history
                            .get()
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <div>
                                        <span class="text-cyan-400">"$ "</span>
                                        {entry.command}
                                    </div>
                                    <div class="mb-2 text-green-200">{entry.output}</div>
                                }
                            })
                            .collect_view()
                    }}
                </pre>
            </div>
            {move || {
                tab_state
                    .get()
                    .map(|ts| {
                        view! {
                            <div class="px-4 pb-2 text-xs flex flex-wrap gap-3">
                                {ts
                                    .opts
                                    .iter()
                                    .enumerate()
                                    .map(|(i, opt)| {
                                        let class = if i == ts.index { "bg-green-400 text-black" } else { "" };
                                        view! { <span class=class>{*opt}</span> }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
            <form
                class="flex items-center gap-2 px-4 py-3 border-t border-green-500/30"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let Some(el) = input_ref.get_untracked() else {
                        return;
                    };
                    handle_cmd(el.value());
                    el.set_value("");
                    set_hist_state(None);
                    set_tab_state(None);
                }
            >
                <span class="text-cyan-400">"$"</span>
                <input
                    node_ref=input_ref
                    on:keydown=keydown_handler
                    type="text"
                    placeholder="Type a command (try 'help')"
                    autocapitalize="none"
                    autocomplete="off"
                    spellcheck="false"
                    class="flex-1 bg-transparent focus:outline-none"
                />
            </form>
        </div>
    }
}
