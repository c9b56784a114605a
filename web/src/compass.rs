use dandelion_core::{Direction, DirectionSet};
use yew::prelude::*;

/// Arrow drawn on a wind button. Diagonals get a plain dot.
pub(crate) const fn arrow(direction: Direction) -> &'static str {
    use Direction::*;
    match direction {
        N => "↑",
        E => "→",
        S => "↓",
        W => "←",
        NE | SE | SW | NW => "•",
    }
}

/// Inline style read by index.html to rotate the button onto the dial.
fn bearing_style(direction: Direction) -> String {
    format!("--bearing: {}deg", direction.bearing())
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct CompassProps {
    pub used: DirectionSet,
    /// Player 2 is expected to act.
    pub active: bool,
    pub callback: Callback<Direction>,
}

#[function_component(CompassView)]
pub(crate) fn compass_component(props: &CompassProps) -> Html {
    let CompassProps {
        used,
        active,
        callback,
    } = props.clone();

    html! {
        <div class={classes!("compass", active.then_some("active"))}>
            {
                for Direction::ALL.into_iter().map(|direction| {
                    let is_used = used.has(direction);
                    let onclick = {
                        let callback = callback.clone();
                        Callback::from(move |_: MouseEvent| {
                            log::trace!("wind {} clicked", direction);
                            callback.emit(direction);
                        })
                    };
                    let style = bearing_style(direction);

                    html! {
                        <button
                            class={classes!("wind", is_used.then_some("used"))}
                            {style}
                            disabled={is_used || !active}
                            {onclick}
                        >
                            <span>{arrow(direction)}</span>
                            <small>{direction.label()}</small>
                        </button>
                    }
                })
            }
        </div>
    }
}
