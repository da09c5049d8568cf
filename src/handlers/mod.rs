pub mod catalog;
pub mod chat;
pub mod contact;
pub mod forum;
pub mod navigation;
pub mod tours;

use tracing::warn;

use crate::app::App;
use crate::state::{AppError, AppResult, MarketMode, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    Next,
    Prev,
    To(usize),
}

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go { view: View, param: Option<String> },
    Search(String),
    Open(String),
    Back,
    Filter(String),
    Page(PageMove),
    Type(String),
    Send,
    Like(String),
    Quote(String),
    New,
    Set { field: String, value: String },
    Submit,
    Cancel,
    Message(String),
    Reviews,
    Profile(Option<String>),
    Close,
    Apply(String),
    Details(String),
    Product(String),
    Mode(MarketMode),
    Expand(String),
    Bell,
    MarkRead,
    Help,
    Quit,
}

fn required<'a>(rest: &'a str, usage: &str) -> AppResult<&'a str> {
    if rest.is_empty() {
        return Err(AppError::Validation(format!("usage: {}", usage)));
    }
    Ok(rest)
}

impl Command {
    pub fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        let arg = |usage: &str| required(rest, usage).map(str::to_string);
        let cmd = match head.to_lowercase().as_str() {
            "go" => {
                let mut parts = rest.split_whitespace();
                let view = parts
                    .next()
                    .ok_or_else(|| AppError::Validation("usage: go <view> [id]".to_string()))?
                    .parse::<View>()?;
                Command::Go {
                    view,
                    param: parts.next().map(str::to_string),
                }
            }
            // An empty query is valid and shows the prompt.
            "search" => Command::Search(rest.to_string()),
            "open" => Command::Open(arg("open <id>")?),
            "back" => Command::Back,
            "filter" => Command::Filter(arg("filter <name>")?),
            "page" => Command::Page(match rest {
                "next" => PageMove::Next,
                "prev" => PageMove::Prev,
                n => PageMove::To(
                    n.parse()
                        .map_err(|_| AppError::Validation("usage: page next|prev|<n>".to_string()))?,
                ),
            }),
            "type" => Command::Type(rest.to_string()),
            "send" => Command::Send,
            "like" => Command::Like(arg("like <id>")?),
            "quote" => Command::Quote(arg("quote <id>")?),
            "new" => Command::New,
            "set" => {
                let (field, value) = required(rest, "set <field> <value>")?
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));
                Command::Set {
                    field: field.to_lowercase(),
                    value: value.trim().to_string(),
                }
            }
            "submit" => Command::Submit,
            "cancel" => Command::Cancel,
            "dm" => Command::Message(arg("dm <user-id>")?),
            "reviews" => Command::Reviews,
            "profile" => Command::Profile((!rest.is_empty()).then(|| rest.to_string())),
            "close" => Command::Close,
            "apply" => Command::Apply(arg("apply <tour-id>")?),
            "details" => Command::Details(arg("details <tour-id>")?),
            "product" => Command::Product(arg("product <tour-id>")?),
            "mode" => Command::Mode(match rest.to_lowercase().as_str() {
                "retail" => MarketMode::Retail,
                "preowned" | "pre-owned" => MarketMode::PreOwned,
                _ => return Err(AppError::Validation("usage: mode retail|preowned".to_string())),
            }),
            "expand" => Command::Expand(arg("expand <category>")?),
            "bell" => Command::Bell,
            "read" => Command::MarkRead,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(AppError::Validation(format!("unknown command '{}'", other))),
        };
        Ok(cmd)
    }
}

pub const HELP: &str = "go <view> [id] | search <q> | open <id> | back | filter <name> | page next|prev|<n> \
| type <text> | send | like <id> | quote <id> | new | set <field> <value> | submit | cancel | dm <user> \
| reviews | profile [user] | close | apply <tour> | details <tour> | product <tour> \
| mode retail|preowned | expand <category> | bell | read | quit";

/// Parse and run one input line. Failures become a notification; any input
/// first dismisses the notification that is up.
pub fn handle_line(line: &str, app: &mut App) {
    if line.trim().is_empty() {
        return;
    }
    app.notifications.clear_notification();
    let result = Command::parse(line).and_then(|cmd| handle_command(cmd, app));
    if let Err(e) = result {
        warn!("command failed: {}", e);
        app.set_notification("Error", e.to_string(), None);
    }
}

/// Main command dispatcher
pub fn handle_command(cmd: Command, app: &mut App) -> AppResult<()> {
    match cmd {
        Command::Go { .. }
        | Command::Search(_)
        | Command::Profile(_)
        | Command::Close
        | Command::Bell
        | Command::MarkRead
        | Command::Help
        | Command::Quit => navigation::handle_navigation(cmd, app),
        _ if app.is_loading() => Err(AppError::Validation("Still loading.".to_string())),
        _ => match app.screen.view() {
            View::Forum => forum::handle_forum_command(cmd, app),
            View::Chat => chat::handle_chat_command(cmd, app),
            View::Marketplace | View::Gears | View::Reviews => catalog::handle_catalog_command(cmd, app),
            View::Tours => tours::handle_tours_command(cmd, app),
            View::Contact => contact::handle_contact_command(cmd, app),
            View::Dashboard | View::Search | View::Profile => navigation::handle_digest_command(cmd, app),
        },
    }
}

pub(crate) fn unsupported(cmd: &Command, view: View) -> AppError {
    AppError::Validation(format!("{:?} is not available on the {} screen", cmd, view))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation() {
        assert_eq!(
            Command::parse("go forum t1").unwrap(),
            Command::Go {
                view: View::Forum,
                param: Some("t1".into())
            }
        );
        assert_eq!(Command::parse("search").unwrap(), Command::Search(String::new()));
        assert_eq!(Command::parse("page 2").unwrap(), Command::Page(PageMove::To(2)));
        assert!(Command::parse("go lobby").is_err());
        assert!(Command::parse("dance").is_err());
    }

    #[test]
    fn parses_arguments_with_spaces() {
        assert_eq!(
            Command::parse("filter Source Gear").unwrap(),
            Command::Filter("Source Gear".into())
        );
        assert_eq!(
            Command::parse("set title My new amp").unwrap(),
            Command::Set {
                field: "title".into(),
                value: "My new amp".into()
            }
        );
        assert!(Command::parse("open").is_err());
    }

    #[test]
    fn errors_surface_as_notifications() {
        let mut app = App::new(crate::global_prefs::PortalPrefs::default()).unwrap();
        handle_line("page 2", &mut app);
        assert_eq!(app.notifications.current.as_ref().unwrap().title, "Error");
        handle_line("help", &mut app);
        assert_ne!(app.notifications.current.as_ref().unwrap().title, "Error");
    }
}
