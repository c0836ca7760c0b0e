use crate::api::HttpTriviaSource;
use crate::utils::*;
use clap::Args;
use clueboard_core as game;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    Empty,
    Open(game::Points),
    Active(game::Points),
    Viewed(game::Points),
}

fn cell_state_at(board: &game::Board, category: &game::Category, row: usize) -> ViewCellState {
    let Some(slot) = category.slot(row) else {
        return ViewCellState::Empty;
    };
    let clue = slot.clue();

    let is_active = board
        .session()
        .active_clue()
        .is_some_and(|active| active.category_id == category.id() && active.clue_id == clue.id);

    match slot.status() {
        game::ClueStatus::Completed => ViewCellState::Viewed(clue.value),
        game::ClueStatus::Open if is_active => ViewCellState::Active(clue.value),
        game::ClueStatus::Open => ViewCellState::Open(clue.value),
    }
}

/// Rows to draw: the configured clue count, or more if a category came back
/// longer than that.
fn row_count(board: &game::Board) -> usize {
    let session = board.session();
    if session.is_empty() {
        return 0;
    }
    session
        .categories()
        .iter()
        .map(|category| category.slots().len())
        .max()
        .unwrap_or(0)
        .max(board.config().clues_per_category)
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    StartClicked,
    ResetClicked,
    ActiveClueClicked,
    CellClicked(game::CategoryId, game::ClueId),
    Loaded(
        game::LoadTicket,
        Result<Vec<game::Category>, game::FetchError>,
    ),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    cell_state: ViewCellState,
    #[prop_or_default]
    target: Option<(game::CategoryId, game::ClueId)>,
    callback: Callback<(game::CategoryId, game::ClueId)>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use ViewCellState::*;

    let CellProps {
        cell_state,
        target,
        callback,
    } = props.clone();

    let class = classes!(
        "cell",
        match cell_state {
            Empty => "empty",
            Open(_) => "open",
            Active(_) => "active",
            Viewed(_) => "viewed",
        }
    );
    let label = match cell_state {
        Empty => String::new(),
        Open(value) | Active(value) | Viewed(value) => format_money(value),
    };

    let onclick = Callback::from(move |_: MouseEvent| {
        if let (Open(_), Some(target)) = (cell_state, target) {
            log::trace!("cell click {:?}", target);
            callback.emit(target);
        }
    });

    html! {
        <td {class} {onclick}>{label}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Base URL of the trivia API
    #[arg(long, default_value = clueboard_protocol::DEFAULT_API_URL)]
    pub(crate) api_url: String,

    /// Number of categories on the board
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_CATEGORIES)]
    pub(crate) categories: usize,

    /// Number of clues per category
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_CLUES)]
    pub(crate) clues: usize,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct BoardView {
    board: game::Board,
    source: HttpTriviaSource,
    seed: Option<u64>,
}

impl BoardView {
    fn spawn_load(&self, ctx: &Context<Self>, ticket: game::LoadTicket) {
        let link = ctx.link().clone();
        let source = self.source.clone();
        let config = *self.board.config();
        let seed = self.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        wasm_bindgen_futures::spawn_local(async move {
            let mut rng = SmallRng::seed_from_u64(seed);
            let loaded = game::load_game(&source, &config, &mut rng).await;
            link.send_message(Msg::Loaded(ticket, loaded));
        });
    }

    fn prompt_class(&self) -> Classes {
        use game::Stage::*;
        classes!(match self.board.session().stage() {
            Idle if self.board.is_loading() => "loading",
            Idle => "idle",
            QuestionShown => "question",
            AnswerShown => "answer",
        })
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            board: game::Board::new(game::GameConfig::new(props.categories, props.clues)),
            source: HttpTriviaSource::new(props.api_url.clone()),
            seed: props.seed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartClicked => match self.board.start_game() {
                Ok(ticket) => {
                    self.spawn_load(ctx, ticket);
                    true
                }
                Err(err) => {
                    log::warn!("Cannot start: {}", err);
                    false
                }
            },
            Loaded(ticket, loaded) => match self.board.finish_load(ticket, loaded) {
                Ok(()) => true,
                Err(game::GameError::StaleLoad) => false,
                Err(err) => {
                    log::debug!("Load ended with: {}", err);
                    true
                }
            },
            ResetClicked => {
                self.board.reset_game();
                true
            }
            ActiveClueClicked => self.board.advance_active_clue().has_update(),
            CellClicked(category_id, clue_id) => {
                log::debug!("select clue: {}/{}", category_id, clue_id);
                self.board.select_clue(category_id, clue_id).has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let controls = self.board.controls();
        let categories = self.board.session().categories();
        let is_playable = self.board.phase() == game::Phase::Playing;
        let rows = row_count(&self.board);

        let cb_start = ctx.link().callback(|_: MouseEvent| StartClicked);
        let cb_reset = ctx.link().callback(|_: MouseEvent| ResetClicked);
        let cb_active_clue = ctx.link().callback(|_: MouseEvent| ActiveClueClicked);
        let cb_cell = ctx
            .link()
            .callback(|(category_id, clue_id): (game::CategoryId, game::ClueId)| {
                CellClicked(category_id, clue_id)
            });

        html! {
            <div class="clueboard">
                <nav>
                    <button id="play" disabled={!controls.start_enabled} onclick={cb_start}>
                        {controls.start_label.to_string()}
                    </button>
                    <button id="reset" disabled={!controls.reset_enabled} onclick={cb_reset}>
                        {"Reset"}
                    </button>
                    <aside>{"Score: "}<span id="score">{self.board.score().to_string()}</span></aside>
                </nav>
                <table id="board" class={is_playable.then_some("playable")}>
                    <thead>
                        <tr id="categories">
                            { for categories.iter().map(|category| html! { <th>{category.title()}</th> }) }
                        </tr>
                    </thead>
                    <tbody id="clues">
                        {
                            for (0..rows).map(|row| html! {
                                <tr>
                                    {
                                        for categories.iter().map(|category| {
                                            let cell_state = cell_state_at(&self.board, category, row);
                                            let target = category
                                                .slot(row)
                                                .map(|slot| (category.id(), slot.clue().id));
                                            let callback = cb_cell.clone();
                                            html! {
                                                <CellView {cell_state} {target} {callback}/>
                                            }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
                <section id="active-clue" class={self.prompt_class()} onclick={cb_active_clue}>
                    {self.board.prompt().to_string()}
                </section>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(categories: Vec<game::Category>) -> game::Board {
        let mut board = game::Board::new(game::GameConfig::new(categories.len(), 3));
        let ticket = board.start_game().unwrap();
        board.finish_load(ticket, Ok(categories)).unwrap();
        board
    }

    fn short_board() -> game::Board {
        board_with(vec![
            game::Category::new(
                1,
                "lakes",
                vec![
                    game::Clue::new(10, "Q", "A", 200),
                    game::Clue::new(11, "Q", "A", 400),
                ],
            ),
            game::Category::new(2, "peaks", vec![game::Clue::new(20, "Q", "A", 200)]),
        ])
    }

    #[test]
    fn rows_cover_configured_clue_count() {
        assert_eq!(row_count(&short_board()), 3);
        assert_eq!(row_count(&game::Board::default()), 0);
    }

    #[test]
    fn missing_rows_render_empty() {
        let board = short_board();
        let peaks = &board.session().categories()[1];

        assert_eq!(cell_state_at(&board, peaks, 0), ViewCellState::Open(200));
        assert_eq!(cell_state_at(&board, peaks, 1), ViewCellState::Empty);
    }

    #[test]
    fn cells_track_the_reveal_cycle() {
        let mut board = short_board();

        board.select_clue(1, 11);
        let lakes = &board.session().categories()[0];
        assert_eq!(cell_state_at(&board, lakes, 1), ViewCellState::Active(400));
        assert_eq!(cell_state_at(&board, lakes, 0), ViewCellState::Open(200));

        board.advance_active_clue();
        board.advance_active_clue();
        let lakes = &board.session().categories()[0];
        assert_eq!(cell_state_at(&board, lakes, 1), ViewCellState::Viewed(400));
    }
}
