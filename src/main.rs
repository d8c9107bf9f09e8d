use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

mod classify;
mod outcome;

use classify::{Classifier, RandomStub};
use outcome::Outcome;

/// Simulated registry-lookup latency.
const CHECK_DELAY_MS: u32 = 1_500;
/// How long the copy button reads "Copied!" after a successful copy.
const COPIED_RESET_MS: u32 = 2_000;

/// Outcome plus the query exactly as it read when the check was submitted,
/// padding included. Editing the input afterwards must not rewrite an
/// already-rendered response.
#[derive(Clone, PartialEq)]
struct Resolution {
    outcome: Outcome,
    query: String,
}

/// Trimming applies only to this emptiness guard, never to display.
fn has_query(raw: &str) -> bool {
    !raw.trim().is_empty()
}

async fn copy_to_clipboard(text: String) -> Result<(), String> {
    let win = window().ok_or("no window")?;
    let cb = win.navigator().clipboard();
    JsFuture::from(cb.write_text(&text))
        .await
        .map_err(|_| "clipboard write rejected".to_string())?;
    Ok(())
}

#[function_component(App)]
fn app() -> Html {
    let input = use_state(String::new);
    let resolution = use_state(|| None::<Resolution>);
    let is_checking = use_state(|| false);
    let copied = use_state(|| false);

    // Owned timer handles. Replacing or dropping one cancels the callback,
    // so nothing fires after teardown or against a superseded check.
    let pending_check = use_mut_ref(|| None::<Timeout>);
    let copied_reset = use_mut_ref(|| None::<Timeout>);

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlInputElement>().value();
            input.set(v);
        })
    };

    let on_check = {
        let input = input.clone();
        let resolution = resolution.clone();
        let is_checking = is_checking.clone();
        let copied = copied.clone();
        let pending_check = pending_check.clone();
        Callback::from(move |_: ()| {
            // Guard both entry points (button and Enter key): empty input
            // and in-flight checks are silent no-ops.
            if *is_checking || !has_query(&input) {
                return;
            }
            let query = (*input).clone();

            is_checking.set(true);
            copied.set(false);

            let resolution = resolution.clone();
            let is_checking = is_checking.clone();
            *pending_check.borrow_mut() = Some(Timeout::new(CHECK_DELAY_MS, move || {
                let outcome = RandomStub::default().classify(&query);
                resolution.set(Some(Resolution { outcome, query }));
                is_checking.set(false);
            }));
        })
    };

    let on_keydown = {
        let on_check = on_check.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_check.emit(());
            }
        })
    };

    let on_copy = {
        let resolution = resolution.clone();
        let copied = copied.clone();
        let copied_reset = copied_reset.clone();
        Callback::from(move |_| {
            let Some(res) = (*resolution).clone() else {
                return;
            };
            let text = res.outcome.message(&res.query);
            let copied = copied.clone();
            let copied_reset = copied_reset.clone();
            spawn_local(async move {
                match copy_to_clipboard(text).await {
                    Ok(()) => {
                        copied.set(true);
                        let copied2 = copied.clone();
                        *copied_reset.borrow_mut() =
                            Some(Timeout::new(COPIED_RESET_MS, move || copied2.set(false)));
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to copy text: {e}").into());
                    }
                }
            });
        })
    };

    let checking_now = *is_checking;
    let trimmed_empty = !has_query(&input);

    let body = if checking_now {
        html! {
            <div class="progress">
                <p>{"Checking business records..."}</p>
            </div>
        }
    } else if let Some(res) = (*resolution).clone() {
        html! {
            <div class={classes!("result", res.outcome.severity().css_class())}>
                <div class="hd">
                    <h2>
                        <span>{ res.outcome.icon() }</span>
                        <span>{ res.outcome.label() }</span>
                    </h2>
                    <button class="primary" onclick={on_copy}>
                        { if *copied { "Copied!" } else { "Copy Response" } }
                    </button>
                </div>
                <div class="bd">
                    <pre>{ res.outcome.message(&res.query) }</pre>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="prompt">
                <div class="glyph">{"🔍"}</div>
                <p>{"Enter a business name or EIN above and click \"Check Status\" to get started"}</p>
            </div>
        }
    };

    html! {
        <div class="wrap">
            <div class="topbar">
                <h1>{"Business Identity Troubleshooting Companion"}</h1>
                <p class="sub">{"Enter a business name or EIN to check verification status and get support guidance"}</p>
                <div class="badges">
                    <span class="badge">{"Rust + Yew"}</span>
                    <span class="badge">{"Demo responses only"}</span>
                </div>
            </div>

            <div class="card">
                <div class="formrow">
                    <input
                        type="text"
                        placeholder="Enter business name or EIN..."
                        value={(*input).clone()}
                        oninput={on_input}
                        onkeydown={on_keydown}
                    />
                    <button
                        class="primary"
                        onclick={on_check.reform(|_| ())}
                        disabled={trimmed_empty || checking_now}
                    >
                        {
                            if checking_now {
                                html! { <><span class="spinner"></span>{"Checking..."}</> }
                            } else {
                                html! { <>{"Check Status"}</> }
                            }
                        }
                    </button>
                </div>

                { body }
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::has_query;

    #[test]
    fn whitespace_only_input_never_submits() {
        assert!(!has_query(""));
        assert!(!has_query("   "));
        assert!(!has_query("\t\n"));
    }

    #[test]
    fn padded_input_still_submits() {
        assert!(has_query("  Acme LLC  "));
        assert!(has_query("12-3456789"));
    }
}
