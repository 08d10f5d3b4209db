use clap::Args;
use gloo::net::http::Request;
use nanpure_core as game;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const DEFAULT_ENDPOINT: &str = "/api/generate/";

// Highlight and judgement backgrounds
const BLOCK_SHADE: &str = "#EEEEEE";
const LINE_SHADE: &str = "#D3D3D3";
const CORRECT_SHADE: &str = "#DAF7A6";
const INCORRECT_SHADE: &str = "#FF5733";

/// One GET against the generator endpoint, mapped to either a validated
/// layout or a message for the status line.
async fn fetch_puzzle(endpoint: &str) -> Result<game::PuzzleLayout, String> {
    let response = Request::get(endpoint)
        .send()
        .await
        .map_err(|err| format!("request failed: {err}"))?;
    if !response.ok() {
        return Err(format!("generator answered HTTP {}", response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| format!("could not read response body: {err}"))?;
    game::PuzzleLayout::from_json(&body).map_err(|err| err.to_string())
}

fn width_px(weight: game::LineWeight) -> &'static str {
    match weight {
        game::LineWeight::Thin => "1px",
        game::LineWeight::Thick => "3px",
    }
}

fn shade_color(shade: game::Shade) -> &'static str {
    match shade {
        game::Shade::Block => BLOCK_SHADE,
        game::Shade::Line => LINE_SHADE,
    }
}

fn row_style(row: game::Coord) -> String {
    let borders = game::row_borders(row);
    let mut style = format!("border-bottom-width: {};", width_px(borders.bottom));
    if let Some(top) = borders.top {
        style.push_str(&format!(" border-top-width: {};", width_px(top)));
    }
    style
}

fn cell_style(pos: game::Coord2, shade: Option<game::Shade>) -> String {
    let borders = game::cell_borders(pos);
    let mut style = format!("border-right-width: {};", width_px(borders.right));
    if let Some(left) = borders.left {
        style.push_str(&format!(" border-left-width: {};", width_px(left)));
    }
    if let Some(top) = borders.top {
        style.push_str(&format!(" border-top-width: {};", width_px(top)));
    }
    if let Some(bottom) = borders.bottom {
        style.push_str(&format!(" border-bottom-width: {};", width_px(bottom)));
    }
    if let Some(shade) = shade {
        style.push_str(&format!(" background-color: {};", shade_color(shade)));
    }
    style
}

/// Input backgrounds: a judgement wins; once revealed, unjudged inputs go
/// bare even though their cells keep the last highlight.
fn input_style(
    revealed: bool,
    shade: Option<game::Shade>,
    judgement: Option<game::Judgement>,
) -> String {
    let color = match judgement {
        Some(game::Judgement::Correct) => Some(CORRECT_SHADE),
        Some(game::Judgement::Incorrect) => Some(INCORRECT_SHADE),
        None if revealed => None,
        None => shade.map(shade_color),
    };
    color
        .map(|color| format!("background-color: {color};"))
        .unwrap_or_default()
}

/// Everything a cell widget needs to draw itself.
#[derive(Copy, Clone, Debug, PartialEq)]
struct ViewCell {
    shown: Option<char>,
    locked: bool,
    revealed: bool,
    shade: Option<game::Shade>,
    judgement: Option<game::Judgement>,
}

fn view_cell(
    engine: &game::PlayEngine,
    focused: Option<game::Coord2>,
    pos: game::Coord2,
) -> ViewCell {
    ViewCell {
        shown: engine.shown_at(pos),
        locked: engine.locked_at(pos),
        revealed: engine.is_revealed(),
        shade: focused.and_then(|anchor| game::highlight_shade(anchor, pos)),
        judgement: engine.judgement_at(pos),
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum CellMsg {
    Focused(game::Coord2),
    Edited(game::Coord2, Option<char>),
    Arrow(game::Coord2, game::ArrowKey),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellEvent(CellMsg),
    Generate,
    Generated(Result<game::PuzzleLayout, String>),
    Reveal,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    cell: ViewCell,
    input_ref: NodeRef,
    callback: Callback<CellMsg>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        cell,
        input_ref,
        callback,
    } = props.clone();
    let pos = (row, col);

    let td_style = cell_style(pos, cell.shade);
    let text_style = input_style(cell.revealed, cell.shade, cell.judgement);
    let value = cell.shown.map(String::from).unwrap_or_default();

    let onfocus = {
        let callback = callback.clone();
        Callback::from(move |_: FocusEvent| {
            callback.emit(CellMsg::Focused(pos));
            log::trace!("({}, {}) focused", row, col);
        })
    };

    let oninput = {
        let callback = callback.clone();
        Callback::from(move |e: InputEvent| {
            let entry = e
                .target_unchecked_into::<HtmlInputElement>()
                .value()
                .chars()
                .next();
            callback.emit(CellMsg::Edited(pos, entry));
            log::trace!("({}, {}) edited: {:?}", row, col, entry);
        })
    };

    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        let Some(key) = game::ArrowKey::from_key(&e.key()) else {
            return;
        };
        // cursor movement inside the field is suppressed even at the edges
        e.prevent_default();
        callback.emit(CellMsg::Arrow(pos, key));
        log::trace!("({}, {}) arrow: {:?}", row, col, key);
    });

    html! {
        <td style={td_style}>
            <input
                type="text"
                maxlength="1"
                style={text_style}
                readonly={cell.locked}
                value={value}
                ref={input_ref}
                {onfocus}
                {oninput}
                {onkeydown}
            />
        </td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Override the generator endpoint
    #[arg(short, long)]
    pub(crate) endpoint: Option<String>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: Option<game::PlayEngine>,
    fetching: bool,
    fetch_error: Option<String>,
    focused: Option<game::Coord2>,
    cell_refs: Vec<NodeRef>,
}

impl GameView {
    fn endpoint(ctx: &Context<Self>) -> String {
        ctx.props()
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    fn focus_cell(&self, pos: game::Coord2) {
        let Some(input) = self.cell_refs[game::to_flat(pos)].cast::<HtmlInputElement>() else {
            return;
        };
        if let Err(err) = input.focus() {
            log::warn!("could not move focus to {:?}: {:?}", pos, err);
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let cell_count = game::GRID_SIZE as usize * game::GRID_SIZE as usize;
        Self {
            engine: None,
            fetching: false,
            fetch_error: None,
            focused: None,
            cell_refs: (0..cell_count).map(|_| NodeRef::default()).collect(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use CellMsg::*;
        use Msg::*;

        match msg {
            Generate => {
                if self.fetching {
                    log::debug!("generation already in flight");
                    return false;
                }
                self.fetching = true;
                self.fetch_error = None;
                let endpoint = Self::endpoint(ctx);
                log::debug!("requesting a puzzle from {}", endpoint);
                ctx.link()
                    .send_future(async move { Generated(fetch_puzzle(&endpoint).await) });
                true
            }
            Generated(Ok(layout)) => {
                log::debug!("new puzzle with {} hidden cells", layout.hidden_count());
                self.engine = Some(game::PlayEngine::new(layout));
                self.focused = None;
                self.fetching = false;
                true
            }
            Generated(Err(err)) => {
                // the previous grid, if any, stays on screen untouched
                log::error!("could not generate a puzzle: {}", err);
                self.fetch_error = Some(err);
                self.fetching = false;
                true
            }
            Reveal => match self.engine.as_mut() {
                None => {
                    gloo::dialogs::alert(
                        "No puzzle has been generated yet.\nPlease generate a puzzle first.",
                    );
                    false
                }
                Some(engine) => match engine.reveal() {
                    Ok(summary) => {
                        log::debug!(
                            "reveal: {} correct, {} incorrect",
                            summary.correct,
                            summary.incorrect
                        );
                        true
                    }
                    Err(err) => {
                        gloo::dialogs::alert("The solution has already been revealed.");
                        log::debug!("reveal rejected: {}", err);
                        false
                    }
                },
            },
            CellEvent(Focused(pos)) => match self.engine.as_ref() {
                Some(engine) if !engine.is_revealed() => {
                    self.focused = Some(pos);
                    true
                }
                _ => false,
            },
            CellEvent(Edited(pos, entry)) => match self.engine.as_mut() {
                Some(engine) => match engine.set_entry(pos, entry) {
                    Ok(()) => true,
                    Err(err) => {
                        log::warn!("entry at {:?} rejected: {}", pos, err);
                        false
                    }
                },
                None => false,
            },
            CellEvent(Arrow(pos, key)) => {
                if let Some(target) = game::arrow_target(pos, key) {
                    self.focus_cell(target);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let cb_generate = ctx.link().callback(|_| Generate);
        let cb_reveal = ctx.link().callback(|_| Reveal);

        html! {
            <div class="nanpure">
                <nav>
                    <button onclick={cb_generate} disabled={self.fetching}>{"Generate"}</button>
                    <button onclick={cb_reveal}>{"Reveal solution"}</button>
                </nav>
                if let Some(error) = &self.fetch_error {
                    <p class="fetch-error">{ error.clone() }</p>
                }
                if let Some(engine) = &self.engine {
                    <table style="margin: 0 auto;">
                        {
                            for (0..game::GRID_SIZE).map(|row| html! {
                                <tr style={row_style(row)}>
                                    {
                                        for (0..game::GRID_SIZE).map(|col| {
                                            let pos = (row, col);
                                            let cell = view_cell(engine, self.focused, pos);
                                            let input_ref = self.cell_refs[game::to_flat(pos)].clone();
                                            let callback = ctx.link().callback(Msg::CellEvent);
                                            html! {
                                                <CellView {row} {col} {cell} {input_ref} {callback}/>
                                            }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </table>
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// All clues `'1'`, except the given positions, which hide a solution.
    fn layout(hidden: &[(game::Coord2, char)]) -> game::PuzzleLayout {
        let rows = (0..game::GRID_SIZE)
            .map(|row| {
                (0..game::GRID_SIZE)
                    .map(|col| {
                        match hidden.iter().find(|(pos, _)| *pos == (row, col)) {
                            Some(&(_, solution)) => game::PuzzleCell::hidden(solution),
                            None => game::PuzzleCell::clue('1'),
                        }
                    })
                    .collect()
            })
            .collect();
        game::PuzzleLayout::from_rows(rows).unwrap()
    }

    #[test]
    fn corner_cell_style_carries_the_heavy_frame() {
        let style = cell_style((0, 0), None);

        assert!(style.contains("border-top-width: 3px"));
        assert!(style.contains("border-left-width: 3px"));
        assert!(style.contains("border-right-width: 1px"));
        assert!(!style.contains("border-bottom-width"));
        assert!(!style.contains("background-color"));
    }

    #[test]
    fn block_edge_cell_style_is_heavy_right_and_bottom() {
        let style = cell_style((2, 2), None);

        assert!(style.contains("border-right-width: 3px"));
        assert!(style.contains("border-bottom-width: 3px"));
        assert!(!style.contains("border-top-width"));
        assert!(!style.contains("border-left-width"));
    }

    #[test]
    fn row_styles_alternate_weights() {
        assert_eq!(row_style(0), "border-bottom-width: 1px; border-top-width: 3px;");
        assert_eq!(row_style(1), "border-bottom-width: 1px;");
        assert_eq!(row_style(2), "border-bottom-width: 3px;");
        assert_eq!(row_style(8), "border-bottom-width: 3px; border-top-width: 3px;");
    }

    #[test]
    fn highlight_shades_color_cell_and_input_alike() {
        let style = cell_style((4, 4), Some(game::Shade::Line));
        assert!(style.contains("background-color: #D3D3D3"));

        assert_eq!(
            input_style(false, Some(game::Shade::Line), None),
            "background-color: #D3D3D3;"
        );
        assert_eq!(
            input_style(false, Some(game::Shade::Block), None),
            "background-color: #EEEEEE;"
        );
        assert_eq!(input_style(false, None, None), "");
    }

    #[test]
    fn judgement_colors_win_over_shades_after_reveal() {
        assert_eq!(
            input_style(true, Some(game::Shade::Line), Some(game::Judgement::Correct)),
            "background-color: #DAF7A6;"
        );
        assert_eq!(
            input_style(true, Some(game::Shade::Block), Some(game::Judgement::Incorrect)),
            "background-color: #FF5733;"
        );
        // a clue input drops its shade once revealed; its cell keeps it
        assert_eq!(input_style(true, Some(game::Shade::Line), None), "");
        assert!(cell_style((4, 4), Some(game::Shade::Line)).contains("#D3D3D3"));
    }

    #[test]
    fn view_cells_follow_the_engine_through_reveal() {
        let mut engine = game::PlayEngine::new(layout(&[((0, 0), '5'), ((0, 1), '6')]));
        engine.set_entry((0, 0), Some('5')).unwrap();

        let cell = view_cell(&engine, Some((0, 0)), (0, 0));
        assert_eq!(cell.shown, Some('5'));
        assert!(!cell.locked);
        assert_eq!(cell.shade, Some(game::Shade::Line));
        assert_eq!(cell.judgement, None);

        engine.reveal().unwrap();

        let correct = view_cell(&engine, Some((0, 0)), (0, 0));
        assert_eq!(correct.judgement, Some(game::Judgement::Correct));
        assert!(correct.locked);
        assert!(correct.revealed);

        let wrong = view_cell(&engine, Some((0, 0)), (0, 1));
        assert_eq!(wrong.judgement, Some(game::Judgement::Incorrect));
        assert_eq!(wrong.shown, Some('6'));
        assert!(wrong.locked);
    }

    #[test]
    fn clue_cells_stay_untouched_by_reveal() {
        let mut engine = game::PlayEngine::new(layout(&[((0, 0), '5')]));
        engine.reveal().unwrap();

        let clue = view_cell(&engine, None, (4, 4));
        assert_eq!(clue.shown, Some('1'));
        assert_eq!(clue.judgement, None);
        assert!(clue.locked);
        assert_eq!(input_style(clue.revealed, clue.shade, clue.judgement), "");
    }
}
