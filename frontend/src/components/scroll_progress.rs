use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::utils::scroll::current_progress;

#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let callback = Closure::wrap(Box::new(move || {
                    progress.set(current_progress());
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                        let _ = window.remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="scroll-progress" role="progressbar"
            aria-valuemin="0" aria-valuemax="100" aria-valuenow={format!("{:.0}", *progress)}>
            <div class="scroll-progress-bar" style={format!("width: {:.2}%;", *progress)}></div>
        </div>
    }
}
