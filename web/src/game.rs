use crate::compass::CompassView;
use dandelion_core as game;
use game::{BOARD_SIZE, Cell, Coord, Coord2, Direction, GameEngine, GameError, TurnState};
use yew::prelude::*;

const BLOCKED_NOTICE: &str = "The wind covered every cell early. Undo or start over.";

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Place(Coord2),
    Wind(Direction),
    Undo,
    Restart,
}

/// Forwards a player intent to the engine.
fn apply(engine: &mut GameEngine, msg: Msg) -> game::Result<()> {
    use Msg::*;
    match msg {
        Place(coords) => engine.place_dandelion(coords).map(drop),
        Wind(direction) => engine.choose_wind(direction).map(drop),
        Undo => engine.undo(),
        Restart => {
            engine.restart();
            Ok(())
        }
    }
}

fn cell_class(cell: Cell) -> Classes {
    match cell {
        Cell::Empty => classes!(),
        Cell::Dandelion => classes!("dandelion"),
        Cell::Filled => classes!("filled"),
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    x: Coord,
    y: Coord,
    cell: Cell,
    #[prop_or_default]
    latest: bool,
    #[prop_or_default]
    clickable: bool,
    callback: Callback<Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        x,
        y,
        cell,
        latest,
        clickable,
        callback,
    } = props.clone();

    let mut class = classes!("cell", cell_class(cell));
    if latest {
        class.push("latest");
    }
    if clickable {
        class.push("clickable");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) clicked", x, y);
        callback.emit((x, y));
    });

    html! {
        <td {class} {onclick}>
            {
                match cell {
                    Cell::Empty => html! {},
                    Cell::Dandelion => html! { <span>{"✳️"}</span> },
                    Cell::Filled => html! { <span>{"•"}</span> },
                }
            }
        </td>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: GameEngine,
    /// Why the last intent was refused, until the next accepted one.
    notice: Option<GameError>,
}

impl GameView {
    fn planters_turn(&self) -> bool {
        !self.engine.is_finished() && self.engine.turn() == TurnState::AwaitingPlacement
    }

    fn winds_turn(&self) -> bool {
        !self.engine.is_finished() && self.engine.turn() == TurnState::AwaitingWind
    }

    fn notice_text(&self) -> Option<String> {
        if self.engine.is_blocked() {
            Some(BLOCKED_NOTICE.to_string())
        } else {
            self.notice.map(|err| err.to_string())
        }
    }

    fn view_field(&self, ctx: &Context<Self>) -> Html {
        let callback = ctx.link().callback(Msg::Place);
        let latest = self.engine.dandelion();

        html! {
            <table class={self.planters_turn().then_some("playable")}>
                {
                    for (0..BOARD_SIZE).map(|y| html! {
                        <tr>
                            {
                                for (0..BOARD_SIZE).map(|x| {
                                    let pos = (x, y);
                                    let cell = self.engine.cell_at(pos);
                                    let clickable = self.engine.can_place_at(pos);
                                    let latest = latest == Some(pos);
                                    let callback = callback.clone();
                                    html! {
                                        <CellView {x} {y} {cell} {latest} {clickable} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }

    fn view_winner(&self, ctx: &Context<Self>) -> Html {
        let show_restart = self.engine.is_finished() || self.engine.is_blocked();
        if !show_restart {
            return html! {};
        }

        let cb_restart = ctx.link().callback(|_| Msg::Restart);
        html! {
            <footer>
                if let Some(winner) = self.engine.winner() {
                    <h3>{winner.title()}</h3>
                }
                <button onclick={cb_restart}>{"Play Again"}</button>
            </footer>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            engine: GameEngine::new(),
            notice: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        log::debug!("intent: {:?}", msg);
        match apply(&mut self.engine, msg) {
            Ok(()) => {
                self.notice = None;
                true
            }
            Err(err) => {
                log::debug!("{:?} refused: {}", msg, err);
                self.notice.replace(err) != Some(err)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_wind = ctx.link().callback(Msg::Wind);
        let cb_undo = ctx.link().callback(|_| Msg::Undo);

        html! {
            <div class="dandelion">
                <section class={classes!("field", self.planters_turn().then_some("active"))}>
                    <h2>{"Player 1: The Field"}</h2>
                    { self.view_field(ctx) }
                    if let Some(notice) = self.notice_text() {
                        <p class="notice">{notice}</p>
                    }
                    <ol class="log">
                        { for self.engine.log().iter().map(|message| html! { <li>{message}</li> }) }
                    </ol>
                </section>
                <section class={classes!("wind", self.winds_turn().then_some("active"))}>
                    <h2>{"Player 2: The Wind"}</h2>
                    <CompassView
                        used={self.engine.used_directions()}
                        active={self.winds_turn()}
                        callback={cb_wind}
                    />
                    <aside>{format!("Directions Left: {}", self.engine.directions_left())}</aside>
                    <button onclick={cb_undo} disabled={!self.engine.can_undo()}>{"↩ Undo"}</button>
                    { self.view_winner(ctx) }
                </section>
            </div>
        }
    }
}
