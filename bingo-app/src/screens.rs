//! Data behind each view, loaded from the catalog, and the form actions that
//! write back to it.

use anyhow::{Context, bail};
use bingo_card::{BingoCard, generate_card, required_phrases};
use serde::Serialize;
use show_catalog::ShowCatalog;
use show_db::{CreateShowInput, Show};

use crate::app::SharedState;
use crate::router::{RouteMatch, View};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Screen {
    ShowsList { shows: Vec<Show> },
    CreateShow { required_phrases: usize },
    Play { show: Show, card: BingoCard },
    Edit { show: Show },
    /// The route named a show id the catalog does not hold.
    Missing { id: i64 },
}

/// Load whatever the matched view needs.
pub async fn load_screen(state: &SharedState, route: &RouteMatch) -> Result<Screen, anyhow::Error> {
    let catalog = state.catalog();
    match route.view {
        View::ShowsList => Ok(Screen::ShowsList {
            shows: catalog.list().await?,
        }),
        View::CreateShow => {
            let blank = CreateShowInput::default().with_id(0);
            Ok(Screen::CreateShow {
                required_phrases: required_phrases(&blank, &state.card_layout()),
            })
        }
        View::BingoCard | View::ShowDetail => {
            let Some(props) = route.props else {
                bail!("{:?} route is missing its id", route.view);
            };
            let Some(show) = catalog.get_by_id(props.id).await? else {
                return Ok(Screen::Missing { id: props.id });
            };
            if route.view == View::ShowDetail {
                return Ok(Screen::Edit { show });
            }
            let card = generate_card(&show, &state.card_layout())
                .with_context(|| format!("show {} cannot fill a card", show.id))?;
            Ok(Screen::Play { show, card })
        }
    }
}

/// Trim every field of a submitted form; blank optional fields become `None`
/// and blank phrase lines are dropped.
pub fn normalize_form(input: CreateShowInput) -> CreateShowInput {
    let optional = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    CreateShowInput {
        show_title: input.show_title.trim().to_string(),
        game_title: optional(input.game_title),
        center_square: optional(input.center_square),
        phrases: input
            .phrases
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
    }
}

fn require_title(input: &CreateShowInput) -> Result<(), anyhow::Error> {
    if input.show_title.is_empty() {
        bail!("show title is required");
    }
    Ok(())
}

/// Save the creation form as a new show.
pub async fn submit_create(
    state: &SharedState,
    input: CreateShowInput,
) -> Result<Show, anyhow::Error> {
    let input = normalize_form(input);
    require_title(&input)?;
    let show = state.catalog().create(input).await?;
    tracing::info!(id = show.id, title = %show.show_title, "Show created");
    Ok(show)
}

/// Save the edit form over the stored show.
pub async fn submit_edit(state: &SharedState, show: Show) -> Result<Show, anyhow::Error> {
    let id = show.id;
    let input = normalize_form(CreateShowInput {
        show_title: show.show_title,
        game_title: show.game_title,
        center_square: show.center_square,
        phrases: show.phrases,
    });
    require_title(&input)?;
    let show = input.with_id(id);
    state.catalog().update(show.clone()).await?;
    tracing::info!(id, "Show updated");
    Ok(show)
}

pub async fn remove_show(state: &SharedState, id: i64) -> Result<(), anyhow::Error> {
    state.catalog().delete(id).await?;
    tracing::info!(id, "Show deleted");
    Ok(())
}

/// Search box handler; surrounding whitespace typed into the box is ignored.
pub async fn search(state: &SharedState, query: &str) -> Result<Vec<Show>, anyhow::Error> {
    Ok(state.catalog().search_by_title(query.trim()).await?)
}
