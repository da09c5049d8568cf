// src/console.rs
// Plain-text summary of the active screen, printed by the console driver
// after every command.

use crate::app::{App, Screen};
use crate::services::listing::{Likes, Paginate};
use crate::services::{ChatService, SearchOutcome};
use crate::state::{
    ChatState, ContactState, DashboardState, ForumState, GearsState, MarketplaceState, ReviewsState,
    SearchState, ToursState,
};

const LOADING: &str = "Loading...";

pub fn render(app: &App) -> String {
    let mut out = vec![format!("== {} ==", app.ui.view)];

    match app.visible_screen() {
        None => out.push(LOADING.to_string()),
        Some(Screen::Dashboard(s)) => draw_dashboard(&mut out, s),
        Some(Screen::Forum(s)) => draw_forum(&mut out, s),
        Some(Screen::Marketplace(s)) => draw_marketplace(&mut out, s),
        Some(Screen::Chat(s)) => draw_chat(&mut out, s),
        Some(Screen::Tours(s)) => draw_tours(&mut out, s),
        Some(Screen::Reviews(s)) => draw_reviews(&mut out, s),
        Some(Screen::Gears(s)) => draw_gears(&mut out, s),
        Some(Screen::Contact(s)) => draw_contact(&mut out, s),
        Some(Screen::Search(s)) => draw_search(&mut out, s),
    }

    if let Some(card) = app.profile.card() {
        out.push(String::new());
        out.push(format!("[profile] {}", card.username));
        if let Some(badge) = &card.badge {
            out.push(format!("  badge: {}", badge));
        }
        out.push(format!("  member since: {}", card.member_since));
        out.push(format!("  bio: {}", card.bio));
        out.push(format!("  gear: {}", card.gear_line()));
    }

    if app.feed.open {
        out.push(String::new());
        out.push(format!("[notifications] {} unread", app.feed.unread_count()));
        for item in app.feed.items() {
            let dot = if item.unread { "*" } else { " " };
            out.push(format!("  {} {} ({})", dot, item.text, item.time));
        }
    }

    if let Some(toast) = &app.notifications.current {
        out.push(String::new());
        out.push(format!("[{}] {}", toast.title, toast.body));
    }

    out.join("\n")
}

fn draw_dashboard(out: &mut Vec<String>, s: &DashboardState) {
    out.push(s.greeting());
    out.push("Latest reviews:".to_string());
    for r in s.latest_reviews() {
        out.push(format!("  {} {} ({}/5)", r.id, r.title, r.rating));
    }
    out.push("Recent threads:".to_string());
    for t in s.recent_threads() {
        out.push(format!("  {} {} [{} replies]", t.id, t.title, t.replies));
    }
    out.push("Messages:".to_string());
    for dm in s.conversations() {
        out.push(format!("  {} {}: {}", dm.id, s.username(&dm.user), dm.last_message));
    }
}

fn draw_forum(out: &mut Vec<String>, s: &ForumState) {
    if let Some(draft) = &s.creating {
        out.push("New discussion".to_string());
        out.push(format!("  title: {}", draft.title));
        out.push(format!("  category: {}", draft.category));
        out.push(format!("  content: {}", draft.content));
        return;
    }
    if let Some(thread) = s.current_thread() {
        out.push(format!("{} ({} replies, {} views)", thread.title, thread.replies, thread.views));
        if let Some(placeholder) = s.posts_placeholder() {
            out.push(format!("  {}", placeholder));
        }
        for post in &thread.posts {
            let liked = if s.is_liked(&post.id) { " *" } else { "" };
            out.push(format!("  {} [{}]{}", post.id, post.timestamp, liked));
            let body = quote_line(out, "    ", &post.content);
            out.push(format!("    {}", body.replace('\n', "\n    ")));
        }
        if !s.reply.text.is_empty() {
            out.push(format!("  reply> {}", s.reply.text.replace('\n', " ")));
        }
        return;
    }
    out.push(format!("filter: {}", s.listing.filter.active()));
    if let Some(empty) = s.empty_message() {
        out.push(empty.to_string());
        return;
    }
    for t in s.page_threads() {
        let pin = if t.is_pinned { "^ " } else { "" };
        out.push(format!("  {}{} {} [{}] {}", pin, t.id, t.title, t.category, t.last_activity));
    }
    let total = s.total_items();
    out.push(format!("page {} of {}", s.pager().page(), s.pager().page_count(total)));
}

fn draw_marketplace(out: &mut Vec<String>, s: &MarketplaceState) {
    if let Some(p) = s.selected_product() {
        out.push(format!("{} {} - {:.2} {}", p.brand, p.name, p.price, p.currency));
        if let Some(seller) = s.seller(&p) {
            out.push(format!("  seller: {}", seller.username));
        }
        for line in MarketplaceState::spec_lines(&p) {
            out.push(format!("  {}", line));
        }
        return;
    }
    out.push(format!("mode: {:?}  filter: {}", s.mode, s.listing.filter.active()));
    for p in s.products() {
        out.push(format!("  {} {} {} - {:.2} {}", p.id, p.brand, p.name, p.price, p.currency));
    }
}

fn draw_gears(out: &mut Vec<String>, s: &GearsState) {
    if let Some(p) = s.selected_product() {
        out.push(format!("{} {} ({:.1}, {} reviews)", p.brand, p.name, p.rating, p.review_count));
        out.push(format!("  {}", GearsState::description(&p)));
        for line in GearsState::spec_lines(&p) {
            out.push(format!("  {}", line));
        }
        if s.show_review_modal {
            out.push("  [writing a review]".to_string());
        }
        if let Some(placeholder) = s.reviews_placeholder() {
            out.push(format!("  {}", placeholder));
        }
        for r in s.product_reviews() {
            out.push(format!("  review {} {} ({}/5)", r.id, r.title, r.rating));
        }
        return;
    }
    out.push(format!("filter: {}  search: {}", s.listing.filter.active(), s.search()));
    if let Some(empty) = s.empty_message() {
        out.push(empty.to_string());
    }
    for p in s.products() {
        out.push(format!("  {} {} {}", p.id, p.brand, p.name));
    }
}

fn draw_chat(out: &mut Vec<String>, s: &ChatState) {
    for dm in s.conversations() {
        let name = s.counterpart(&dm).map(|u| u.username).unwrap_or_default();
        let active = if s.active_dm_id.as_deref() == Some(dm.id.as_str()) { ">" } else { " " };
        out.push(format!("{} {} {} ({} unread) {}", active, dm.id, name, dm.unread_count, dm.last_message));
    }
    if s.show_compose {
        out.push("New message to:".to_string());
        for u in s.compose_candidates() {
            out.push(format!("  {} {}", u.id, u.username));
        }
        return;
    }
    if let Some(dm) = s.active_conversation() {
        for m in &dm.messages {
            let who = if m.is_me { "You" } else { "Them" };
            let liked = if s.is_liked(&m.id) { " *" } else { "" };
            let mut quoted = Vec::new();
            let body = quote_line(&mut quoted, "      ", &m.content);
            out.push(format!("  {} {} [{}]{}: {}", m.id, who, m.timestamp, liked, body));
            out.extend(quoted);
        }
    }
    if !s.draft.text.is_empty() {
        out.push(format!("  draft> {}", s.draft.text.replace('\n', " ")));
    }
}

/// Print a leading quoted reply as its own line and return the rest.
fn quote_line<'a>(out: &mut Vec<String>, indent: &str, content: &'a str) -> &'a str {
    match ChatService::parse_quote(content) {
        Some(q) => {
            out.push(format!("{}| @{}: \"{}\"", indent, q.author, q.quoted.replace('\n', " ")));
            q.body
        }
        None => content,
    }
}

fn draw_tours(out: &mut Vec<String>, s: &ToursState) {
    out.push(format!("region: {}", s.region.active()));
    for t in s.tours() {
        out.push(format!(
            "  {} {} [{}] {} - {} slots {}",
            t.id,
            t.title,
            t.status,
            t.start_date,
            t.end_date,
            ToursState::slots_label(&t)
        ));
        if s.is_expanded(&t.id) {
            out.push(format!("    {}", t.description));
            if let Some(host) = s.host(&t) {
                out.push(format!("    host: {}", host.username));
            }
            if let Some(placeholder) = s.impressions_placeholder(&t.id) {
                out.push(format!("    {}", placeholder));
            }
            for i in &t.impressions {
                out.push(format!("    \"{}\" ({})", i.content, i.date));
            }
        }
    }
}

fn draw_reviews(out: &mut Vec<String>, s: &ReviewsState) {
    if let Some(r) = s.selected_review() {
        out.push(format!("{} - {} by {}", r.title, r.product_name, s.author_name(&r)));
        out.push(format!("  {}", ReviewsState::full_content(&r)));
        return;
    }
    for section in s.sections() {
        out.push(format!("{} ({})", section.category.as_str(), section.total));
        for r in &section.reviews {
            out.push(format!("  {} {} ({}/5)", r.id, r.title, r.rating));
        }
        if section.has_more() {
            out.push("  ...".to_string());
        }
    }
}

fn draw_contact(out: &mut Vec<String>, s: &ContactState) {
    if s.submitted {
        out.push("Message sent.".to_string());
        return;
    }
    out.push(format!("  name: {}", s.form.name));
    out.push(format!("  email: {}", s.form.email));
    out.push(format!("  subject: {}", s.form.subject));
    out.push(format!("  message: {}", s.form.message));
}

fn draw_search(out: &mut Vec<String>, s: &SearchState) {
    out.push(format!("query: {}", s.query));
    match &s.outcome {
        SearchOutcome::Found(results) => {
            out.push(format!("Users ({})", results.users.len()));
            for u in &results.users {
                out.push(format!("  {} {}", u.id, u.username));
            }
            out.push(format!("Threads ({})", results.threads.len()));
            for t in &results.threads {
                out.push(format!("  {} {}", t.id, t.title));
            }
            out.push(format!("Gears ({})", results.products.len()));
            for p in &results.products {
                out.push(format!("  {} {} {}", p.id, p.brand, p.name));
            }
        }
        other => out.extend(other.message().map(str::to_string)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::global_prefs::PortalPrefs;
    use crate::state::View;

    #[test]
    fn loading_placeholder_then_content() {
        let mut app = App::new(PortalPrefs::default()).unwrap();
        app.change_view(View::Forum, None);
        assert!(render(&app).contains(LOADING));
        app.on_tick(app.prefs.loading_delay_ms);
        let text = render(&app);
        assert!(text.contains("page 1 of 1"));
    }

    #[test]
    fn quoted_replies_render_as_quotes() {
        let mut app = App::new(PortalPrefs::default()).unwrap();
        app.change_view(View::Forum, Some("t1".into()));
        app.on_tick(app.prefs.loading_delay_ms);
        crate::handlers::handle_line("quote p1", &mut app);
        crate::handlers::handle_line("type Same experience here", &mut app);
        crate::handlers::handle_line("send", &mut app);
        let text = render(&app);
        assert!(text.contains("    | @"));
        assert!(text.contains("    Same experience here"));
        assert!(!text.contains("> @"));
    }

    #[test]
    fn feed_panel_lists_entries_when_open() {
        let mut app = App::new(PortalPrefs::default()).unwrap();
        assert!(!render(&app).contains("[notifications]"));
        app.feed.toggle();
        let text = render(&app);
        assert!(text.contains("[notifications] 1 unread"));
        assert!(text.contains("  * TubeMaster replied to your thread (2m ago)"));
    }

    #[test]
    fn search_prompt_is_rendered() {
        let mut app = App::new(PortalPrefs::default()).unwrap();
        app.search("   ");
        assert!(render(&app).contains(crate::services::SEARCH_PROMPT));
    }
}
