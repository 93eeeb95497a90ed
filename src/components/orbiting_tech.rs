use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::tech_popover::TechPopover;
use crate::orbit::animator::OrbitAnimator;
use crate::orbit::catalog::{default_technologies, OrbitRing, Technology};
use crate::orbit::geometry::orbit_offset;
use crate::orbit::positioner::{place_popover, PopoverLayout, Rect};

// Grace period before a pointer-leave clears the popover, long enough to move
// the pointer from the icon into the popover itself.
const HOVER_GRACE_MS: u32 = 150;

#[derive(Properties, PartialEq)]
pub struct OrbitingTechProps {
    #[prop_or_default]
    pub technologies: Option<Vec<Technology>>,
    #[prop_or_default]
    pub center_label: Option<Html>,
}

#[function_component(OrbitingTech)]
pub fn orbiting_tech(props: &OrbitingTechProps) -> Html {
    let technologies = props
        .technologies
        .clone()
        .unwrap_or_else(default_technologies);

    let hovered: UseStateHandle<Option<Technology>> = use_state(|| None);
    let layout: UseStateHandle<Option<PopoverLayout>> = use_state(|| None);
    let rotations = use_state(|| [0.0f64; 3]);
    let animator = use_mut_ref(OrbitAnimator::new);
    // Single slot for the grace timer. Replacing or taking the handle cancels
    // the pending callback, so at most one clear can ever be in flight.
    let leave_timer = use_mut_ref(|| None::<Timeout>);
    let container_ref = use_node_ref();

    let paused = hovered.is_some();

    {
        let animator = animator.clone();
        use_effect_with_deps(
            move |paused| {
                animator.borrow_mut().set_paused(*paused);
                || ()
            },
            paused,
        );
    }

    // One animation-frame loop for all rings, running for the lifetime of the
    // widget. Deltas come from the callback timestamp, so the rotation speed
    // doesn't depend on the host's refresh rate.
    {
        let animator = animator.clone();
        let rotations = rotations.clone();
        use_effect_with_deps(
            move |_| {
                let raf_id = Rc::new(Cell::new(None::<i32>));
                let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));
                let last_time = Rc::new(Cell::new(None::<f64>));

                {
                    let raf_id = raf_id.clone();
                    let frame_handle = frame.clone();
                    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                        let dt = match last_time.replace(Some(now)) {
                            Some(prev) => (now - prev) / 1000.0,
                            None => 0.0,
                        };
                        {
                            let mut animator = animator.borrow_mut();
                            if animator.tick(dt) {
                                rotations.set(animator.rotations());
                            }
                        }
                        if let Some(window) = web_sys::window() {
                            if let Some(frame) = frame_handle.borrow().as_ref() {
                                if let Ok(id) = window
                                    .request_animation_frame(frame.as_ref().unchecked_ref())
                                {
                                    raf_id.set(Some(id));
                                }
                            }
                        }
                    })
                        as Box<dyn FnMut(f64)>));
                }

                if let Some(window) = web_sys::window() {
                    if let Some(frame) = frame.borrow().as_ref() {
                        if let Ok(id) =
                            window.request_animation_frame(frame.as_ref().unchecked_ref())
                        {
                            raf_id.set(Some(id));
                        }
                    }
                }

                move || {
                    if let Some(id) = raf_id.get() {
                        if let Some(window) = web_sys::window() {
                            let _ = window.cancel_animation_frame(id);
                        }
                    }
                    frame.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Drop any pending grace timer with the widget.
    {
        let leave_timer = leave_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    leave_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_icon_enter = {
        let hovered = hovered.clone();
        let layout = layout.clone();
        let leave_timer = leave_timer.clone();
        let container_ref = container_ref.clone();
        Callback::from(move |(tech, e): (Technology, MouseEvent)| {
            // A pending clear from the previous icon must die before the new
            // hover lands, otherwise it would wipe this one.
            leave_timer.borrow_mut().take();

            let container = match container_ref.cast::<web_sys::Element>() {
                Some(el) => el,
                None => return,
            };
            let target = match e
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                Some(el) => el,
                None => return,
            };

            let crect = container.get_bounding_client_rect();
            let irect = target.get_bounding_client_rect();
            let icon = Rect::new(
                irect.left() - crect.left(),
                irect.top() - crect.top(),
                irect.width(),
                irect.height(),
            );
            let placed = place_popover(&icon, crect.width(), crect.height());
            log::debug!("popover for {} goes {:?}", tech.name, placed.placement);

            layout.set(Some(placed));
            hovered.set(Some(tech));
        })
    };

    let schedule_clear = {
        let hovered = hovered.clone();
        let layout = layout.clone();
        let leave_timer = leave_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let hovered = hovered.clone();
            let layout = layout.clone();
            *leave_timer.borrow_mut() = Some(Timeout::new(HOVER_GRACE_MS, move || {
                hovered.set(None);
                layout.set(None);
            }));
        })
    };

    let cancel_clear = {
        let leave_timer = leave_timer.clone();
        Callback::from(move |_: MouseEvent| {
            leave_timer.borrow_mut().take();
        })
    };

    let center = props
        .center_label
        .clone()
        .unwrap_or_else(|| html! { <span class="center-monogram">{"TF"}</span> });

    let glow = hovered
        .as_ref()
        .map(|tech| format!("{}4d", tech.color))
        .unwrap_or_else(|| "rgba(30, 144, 255, 0.25)".to_string());

    html! {
        <div ref={container_ref} class="orbiting-tech">
            <div class="orbit-glow" style={format!("background: {};", glow)}></div>

            { for OrbitRing::ALL.iter().filter(|ring| technologies.iter().any(|t| t.ring == **ring)).map(|ring| {
                let d = ring.radius() * 2.0;
                html! {
                    <div
                        class={classes!("orbit-outline", paused.then(|| "dimmed"))}
                        style={format!("width: {d}px; height: {d}px;")}
                    ></div>
                }
            }) }

            <div class={classes!("orbit-center", paused.then(|| "lifted"))}>
                { center }
            </div>

            { for OrbitRing::ALL.iter().map(|ring| {
                let items: Vec<&Technology> = technologies.iter().filter(|t| t.ring == *ring).collect();
                if items.is_empty() {
                    return html! {};
                }
                let rotation = rotations[ring.index()];
                html! {
                    <>
                    { for items.iter().enumerate().map(|(i, tech)| {
                        let (x, y) = orbit_offset(i, items.len(), ring.radius(), rotation);
                        let is_hovered = hovered
                            .as_ref()
                            .map(|h| h.name == tech.name)
                            .unwrap_or(false);
                        let enter = {
                            let on_icon_enter = on_icon_enter.clone();
                            let tech = (*tech).clone();
                            Callback::from(move |e: MouseEvent| on_icon_enter.emit((tech.clone(), e)))
                        };
                        let border = if is_hovered {
                            tech.color.clone()
                        } else {
                            "rgba(148, 163, 184, 0.35)".to_string()
                        };
                        html! {
                            <div
                                key={tech.name.clone()}
                                class="orbit-item"
                                style={format!(
                                    "transform: translate({x:.2}px, {y:.2}px); z-index: {};",
                                    if is_hovered { 50 } else { 10 },
                                )}
                            >
                                <div
                                    class={classes!(
                                        "orbit-icon",
                                        is_hovered.then(|| "hovered"),
                                        (paused && !is_hovered).then(|| "dimmed"),
                                    )}
                                    style={format!("border-color: {};", border)}
                                    onmouseenter={enter}
                                    onmouseleave={schedule_clear.clone()}
                                >
                                    { tech.icon.clone() }
                                </div>
                            </div>
                        }
                    }) }
                    </>
                }
            }) }

            {
                if let (Some(tech), Some(placed)) = (hovered.as_ref(), *layout) {
                    html! {
                        <div
                            class="popover-anchor"
                            style={format!("left: {:.2}px; top: {:.2}px;", placed.x, placed.y)}
                            onmouseenter={cancel_clear.clone()}
                            onmouseleave={schedule_clear.clone()}
                        >
                            <TechPopover tech={tech.clone()} placement={placed.placement} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <p class={classes!("orbit-hint", paused.then(|| "hidden"))}>
                {"Hover a technology to see why we use it"}
            </p>

            <style>
                {r#"
                .orbiting-tech {
                    position: relative;
                    width: 100%;
                    max-width: 550px;
                    aspect-ratio: 1 / 1;
                    margin: 0 auto;
                }

                .orbit-glow {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 160px;
                    height: 160px;
                    margin: -80px 0 0 -80px;
                    border-radius: 50%;
                    filter: blur(48px);
                    pointer-events: none;
                    transition: background 0.3s ease;
                    z-index: 0;
                }

                .orbit-outline {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    border: 1px solid rgba(126, 178, 255, 0.2);
                    border-radius: 50%;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }

                .orbit-outline.dimmed {
                    opacity: 0.5;
                }

                .orbit-center {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 88px;
                    height: 88px;
                    border-radius: 20px;
                    background: linear-gradient(135deg, #0066FF, #4F46E5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 16px 48px rgba(30, 144, 255, 0.35);
                    transition: transform 0.3s ease;
                    z-index: 20;
                }

                .orbit-center.lifted {
                    transform: translate(-50%, -50%) scale(1.05);
                }

                .center-monogram {
                    font-size: 2rem;
                    font-weight: 800;
                    color: #fff;
                }

                .orbit-item {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 56px;
                    height: 56px;
                    margin: -28px 0 0 -28px;
                }

                .orbit-icon {
                    width: 56px;
                    height: 56px;
                    border-radius: 14px;
                    background: rgba(255, 255, 255, 0.95);
                    border: 2px solid;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    box-shadow: 0 8px 24px rgba(2, 8, 23, 0.35);
                    transition: opacity 0.2s ease, border-color 0.2s ease, transform 0.2s ease;
                }

                .orbit-icon.hovered {
                    transform: scale(1.2);
                }

                .orbit-icon.dimmed {
                    opacity: 0.5;
                }

                .tech-glyph {
                    font-size: 1.1rem;
                    font-weight: 800;
                    letter-spacing: -0.02em;
                }

                .popover-anchor {
                    position: absolute;
                    z-index: 100;
                }

                .orbit-hint {
                    position: absolute;
                    bottom: -36px;
                    left: 50%;
                    transform: translateX(-50%);
                    font-size: 0.75rem;
                    color: #94a3b8;
                    white-space: nowrap;
                    transition: opacity 0.3s ease;
                }

                .orbit-hint.hidden {
                    opacity: 0;
                }
                "#}
            </style>
        </div>
    }
}
