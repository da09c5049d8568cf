use crate::app::{App, Screen};
use crate::handlers::{unsupported, Command};
use crate::model::ReviewCategory;
use crate::state::{AppError, AppResult, GearsState, MarketplaceState, ReviewsState, View};
use crate::store::RepoError;

/// Marketplace, gears and reviews share the browse-then-open shape.
pub fn handle_catalog_command(cmd: Command, app: &mut App) -> AppResult<()> {
    match &mut app.screen {
        Screen::Marketplace(market) => handle_marketplace(cmd, market),
        Screen::Gears(gears) => handle_gears(cmd, gears),
        Screen::Reviews(reviews) => handle_reviews(cmd, reviews),
        _ => Err(unsupported(&cmd, app.ui.view)),
    }
}

fn opened(found: bool, id: String) -> AppResult<()> {
    if found {
        Ok(())
    } else {
        Err(RepoError::NotFound(id).into())
    }
}

fn handle_marketplace(cmd: Command, market: &mut MarketplaceState) -> AppResult<()> {
    match cmd {
        Command::Open(id) => return opened(market.open_product(&id), id),
        Command::Back => market.back_to_list(),
        Command::Filter(name) => market.set_filter(&name)?,
        Command::Mode(mode) => market.set_mode(mode),
        other => return Err(unsupported(&other, View::Marketplace)),
    }
    Ok(())
}

fn handle_gears(cmd: Command, gears: &mut GearsState) -> AppResult<()> {
    match cmd {
        Command::Open(id) => return opened(gears.open_product(&id), id),
        Command::Back => gears.back_to_list(),
        Command::Filter(name) => gears.set_filter(&name)?,
        Command::Type(query) => gears.set_search(&query),
        Command::Reviews => {
            if gears.selected_product().is_none() {
                return Err(AppError::Validation("Open a product first.".to_string()));
            }
            gears.toggle_review_modal();
        }
        other => return Err(unsupported(&other, View::Gears)),
    }
    Ok(())
}

fn handle_reviews(cmd: Command, reviews: &mut ReviewsState) -> AppResult<()> {
    match cmd {
        Command::Open(id) => return opened(reviews.open_review(&id), id),
        Command::Back => reviews.back_to_list(),
        Command::Expand(name) => {
            let category = ReviewCategory::parse(&name).ok_or(AppError::UnknownFilter(name))?;
            reviews.toggle_section(category);
        }
        other => return Err(unsupported(&other, View::Reviews)),
    }
    Ok(())
}
