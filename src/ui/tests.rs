use std::cell::RefCell;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use super::{App, SearchUi, SessionOutcome};
use crate::api::stub::{StubBackend, sample_results};
use crate::api::{DEFAULT_BASE_URL, Routes, SearchBackend, SearchRequest, SearchResult};
use crate::view::{EMPTY_TERM_MESSAGE, StatusKind};

thread_local! {
	static LAUNCHED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn record_launch(url: &str) -> io::Result<()> {
	LAUNCHED.with(|launched| launched.borrow_mut().push(url.to_string()));
	Ok(())
}

fn failing_launch(_url: &str) -> io::Result<()> {
	Err(io::Error::other("no browser"))
}

fn launched() -> Vec<String> {
	LAUNCHED.with(|launched| launched.borrow().clone())
}

fn routes() -> Routes {
	Routes::new(DEFAULT_BASE_URL).expect("routes")
}

fn app_for(stub: &Arc<StubBackend>) -> App<'static> {
	let backend: Arc<dyn SearchBackend> = stub.clone();
	let mut app = App::new(backend, routes()).expect("app");
	app.launcher = record_launch;
	app
}

/// Pump backend events until every spawned task has reported back.
fn settle(app: &mut App<'_>) {
	let deadline = Instant::now() + Duration::from_secs(5);
	loop {
		app.pump_backend_events();
		if !app.search.is_in_flight() {
			break;
		}
		assert!(Instant::now() < deadline, "backend did not answer in time");
		thread::sleep(Duration::from_millis(5));
	}
}

fn press(app: &mut App<'_>, code: KeyCode) -> Option<SessionOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
		.expect("key handled")
}

fn ctrl(app: &mut App<'_>, c: char) -> Option<SessionOutcome> {
	app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
		.expect("key handled")
}

fn type_text(app: &mut App<'_>, text: &str) {
	for c in text.chars() {
		press(app, KeyCode::Char(c));
	}
}

fn search(app: &mut App<'_>, term: &str) {
	type_text(app, term);
	press(app, KeyCode::Enter);
	settle(app);
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(120, 24)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	terminal.backend().to_string()
}

#[test]
fn enter_on_an_empty_field_is_rejected_without_a_request() {
	let stub = Arc::new(StubBackend::new());
	let mut app = app_for(&stub);

	press(&mut app, KeyCode::Enter);
	settle(&mut app);

	assert!(stub.requests().is_empty());
	assert!(render(&mut app).contains(EMPTY_TERM_MESSAGE));
}

#[test]
fn search_renders_results_status_and_counters() {
	let stub = Arc::new(StubBackend::new().respond_with(sample_results(3)));
	let mut app = app_for(&stub);

	type_text(&mut app, "bhaskara");
	press(&mut app, KeyCode::Enter);
	assert!(app.is_searching());
	assert!(render(&mut app).contains("Querying the API"));

	settle(&mut app);
	let screen = render(&mut app);
	assert!(screen.contains("Mapa mental 0"), "{screen}");
	assert!(screen.contains("Mapa mental 2"), "{screen}");
	assert!(screen.contains("Ok! Showing results for \"bhaskara\"."));
	assert!(screen.contains("Page: 1  Items: 3"));
	assert!(screen.contains("Servidor Local"));
	assert_eq!(stub.requests(), vec![SearchRequest::new("bhaskara", 1)]);
	assert_eq!(app.table_state.selected(), Some(0));
}

#[test]
fn typing_is_ignored_while_a_search_runs() {
	let stub = Arc::new(StubBackend::new().respond_with(sample_results(1)));
	let mut app = app_for(&stub);

	type_text(&mut app, "bhaskara");
	press(&mut app, KeyCode::Enter);
	type_text(&mut app, "xyz");

	assert_eq!(app.search_input.text(), "bhaskara");
	settle(&mut app);
}

#[test]
fn page_down_continues_with_the_last_searched_term() {
	let stub = Arc::new(
		StubBackend::new()
			.respond_with(sample_results(2))
			.respond_with(sample_results(2)),
	);
	let mut app = app_for(&stub);

	search(&mut app, "bhaskara");
	type_text(&mut app, " edited");
	press(&mut app, KeyCode::PageDown);
	settle(&mut app);

	assert_eq!(
		stub.requests(),
		vec![
			SearchRequest::new("bhaskara", 1),
			SearchRequest::new("bhaskara", 2),
		]
	);
	assert!(render(&mut app).contains("Page 2"));
}

#[test]
fn paging_keys_need_results() {
	let stub = Arc::new(StubBackend::new());
	let mut app = app_for(&stub);

	press(&mut app, KeyCode::PageDown);
	press(&mut app, KeyCode::PageUp);
	settle(&mut app);

	assert!(stub.requests().is_empty());
	assert_eq!(app.view.state().page, 1);
}

#[test]
fn page_up_on_the_first_page_does_nothing() {
	let stub = Arc::new(StubBackend::new().respond_with(sample_results(2)));
	let mut app = app_for(&stub);

	search(&mut app, "bhaskara");
	press(&mut app, KeyCode::PageUp);
	settle(&mut app);

	assert_eq!(stub.requests().len(), 1);
	assert!(!app.is_searching());
}

#[test]
fn ctrl_l_resets_the_screen() {
	let stub = Arc::new(StubBackend::new().respond_with(sample_results(4)));
	let mut app = app_for(&stub);

	search(&mut app, "bhaskara");
	ctrl(&mut app, 'l');

	assert!(app.results().is_empty());
	assert_eq!(app.search_input.text(), "");
	assert!(app.current_status().is_empty());
	assert_eq!(app.view.state().page, 1);
	assert_eq!(app.table_state.selected(), None);
}

#[test]
fn enter_and_clear_wait_for_the_running_search() {
	let stub = Arc::new(StubBackend::new().respond_with(sample_results(4)));
	let mut app = app_for(&stub);

	type_text(&mut app, "bhaskara");
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);
	ctrl(&mut app, 'l');
	assert_eq!(app.search_input.text(), "bhaskara");
	settle(&mut app);

	assert_eq!(stub.requests().len(), 1);
	assert_eq!(app.results().len(), 4);
}

#[test]
fn failed_search_shows_the_backend_error() {
	let stub = Arc::new(StubBackend::new().fail_with(500, "internal"));
	let mut app = app_for(&stub);

	search(&mut app, "bhaskara");

	assert!(app.results().is_empty());
	assert_eq!(app.current_status().kind, StatusKind::Error);
	assert!(render(&mut app).contains("Error 500 while searching. internal"));
}

#[test]
fn empty_answer_shows_the_hint() {
	let stub = Arc::new(StubBackend::new().respond_with(Vec::new()));
	let mut app = app_for(&stub);

	search(&mut app, "xyz");

	assert!(render(&mut app).contains("No results. Try another term."));
}

#[test]
fn broken_images_switch_to_the_placeholder() {
	let results = sample_results(2);
	let broken = results[0].image_url.clone();
	let stub = Arc::new(
		StubBackend::new()
			.respond_with(results)
			.with_broken_image(&broken),
	);
	let mut app = app_for(&stub);

	search(&mut app, "bhaskara");

	let card = app.selected_card().expect("card");
	assert!(card.thumbnail.is_placeholder());
	assert!(render(&mut app).contains("placeholder.png"));

	press(&mut app, KeyCode::Down);
	let card = app.selected_card().expect("card");
	assert!(!card.thumbnail.is_placeholder());
}

#[test]
fn ctrl_o_opens_the_source_page() {
	let stub = Arc::new(StubBackend::new().respond_with(sample_results(2)));
	let mut app = app_for(&stub);

	search(&mut app, "bhaskara");
	press(&mut app, KeyCode::Down);
	ctrl(&mut app, 'o');

	assert_eq!(launched(), vec!["http://source.example/1".to_string()]);
	assert!(app.current_status().message.starts_with("Opened"));
}

#[test]
fn ctrl_o_hands_the_link_over_unmodified() {
	let link = "http://source.example/mapa?q=a  b";
	let stub = Arc::new(StubBackend::new().respond_with(vec![SearchResult::new(
		"Mapa",
		link,
		"/static/mapas_salvos/a.jpg",
		"Web",
	)]));
	let mut app = app_for(&stub);

	search(&mut app, "bhaskara");
	ctrl(&mut app, 'o');

	assert_eq!(launched(), vec![link.to_string()]);
	assert_eq!(
		app.current_status().message,
		"Opened http://source.example/mapa?q=a b"
	);
}

#[test]
fn ctrl_d_opens_the_download_route() {
	let stub = Arc::new(StubBackend::new().respond_with(sample_results(1)));
	let mut app = app_for(&stub);

	search(&mut app, "bhaskara");
	ctrl(&mut app, 'd');

	let opened = launched();
	assert_eq!(opened.len(), 1);
	assert!(opened[0].starts_with("http://localhost:5000/baixar_imagem?url=%2Fstatic%2F"));
}

#[test]
fn launcher_failures_are_reported() {
	let stub = Arc::new(StubBackend::new().respond_with(sample_results(1)));
	let mut app = app_for(&stub);
	app.launcher = failing_launch;

	search(&mut app, "bhaskara");
	ctrl(&mut app, 'o');

	assert_eq!(app.current_status().kind, StatusKind::Error);
	assert!(app.current_status().message.contains("no browser"));
}

#[test]
fn ctrl_s_saves_the_selected_image() {
	let results = sample_results(2);
	let expected = results[1].image_url.clone();
	let stub = Arc::new(StubBackend::new().respond_with(results));
	let mut app = app_for(&stub);
	app.set_download_dir("saved-maps");

	search(&mut app, "bhaskara");
	press(&mut app, KeyCode::Down);
	ctrl(&mut app, 's');
	settle(&mut app);

	assert_eq!(stub.downloads(), vec![expected]);
	let status = app.current_status();
	assert_eq!(status.kind, StatusKind::Ok);
	assert!(status.message.contains("mapa_mental.jpg"), "{}", status.message);
}

#[test]
fn ctrl_s_reports_a_failed_save_once() {
	let stub = Arc::new(
		StubBackend::new()
			.respond_with(sample_results(1))
			.with_failing_downloads(),
	);
	let mut app = app_for(&stub);

	search(&mut app, "bhaskara");
	ctrl(&mut app, 's');
	settle(&mut app);

	let status = app.current_status();
	assert_eq!(status.kind, StatusKind::Error);
	assert_eq!(
		status.message,
		"Could not save the image: permission denied"
	);
	assert_eq!(status.message.matches("Could not save").count(), 1);
}

#[test]
fn notices_give_way_to_the_next_search() {
	let stub = Arc::new(
		StubBackend::new()
			.respond_with(sample_results(1))
			.respond_with(sample_results(1)),
	);
	let mut app = app_for(&stub);

	search(&mut app, "bhaskara");
	ctrl(&mut app, 'o');
	press(&mut app, KeyCode::PageDown);

	assert!(app.current_status().message.starts_with("Querying"));
	settle(&mut app);
}

#[test]
fn selection_stays_within_the_results() {
	let stub = Arc::new(StubBackend::new().respond_with(sample_results(2)));
	let mut app = app_for(&stub);

	search(&mut app, "bhaskara");
	press(&mut app, KeyCode::Up);
	assert_eq!(app.table_state.selected(), Some(0));
	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Down);
	assert_eq!(app.table_state.selected(), Some(1));
}

#[test]
fn escape_reports_the_session_outcome() {
	let stub = Arc::new(StubBackend::new().respond_with(sample_results(3)));
	let mut app = app_for(&stub);

	search(&mut app, "bhaskara");
	press(&mut app, KeyCode::Down);
	let outcome = press(&mut app, KeyCode::Esc).expect("outcome");

	assert_eq!(outcome.term, "bhaskara");
	assert_eq!(outcome.page, 1);
	assert_eq!(
		outcome.selection.map(|result| result.title),
		Some("Mapa mental 1".to_string())
	);
}

#[test]
fn ctrl_c_quits_without_a_selection_before_searching() {
	let stub = Arc::new(StubBackend::new());
	let mut app = app_for(&stub);

	let outcome = ctrl(&mut app, 'c').expect("outcome");
	assert!(outcome.selection.is_none());
	assert_eq!(outcome.page, 1);
}

#[test]
fn control_characters_in_titles_never_reach_the_terminal() {
	let hostile = SearchResult::new(
		"\u{1b}[2JEvil map",
		"http://a",
		"http://b/i.png",
		"Web",
	);
	let stub = Arc::new(StubBackend::new().respond_with(vec![hostile]));
	let mut app = app_for(&stub);

	search(&mut app, "evil");

	let screen = render(&mut app);
	assert!(screen.contains("[2JEvil map"));
	assert!(!screen.contains('\u{1b}'));
}

#[test]
fn f2_toggles_the_log_viewer() {
	let stub = Arc::new(StubBackend::new());
	let mut app = app_for(&stub);

	press(&mut app, KeyCode::F(2));
	assert!(app.show_logs);
	press(&mut app, KeyCode::F(2));
	assert!(!app.show_logs);
}

#[test]
fn initial_query_is_searched_on_start() {
	let stub = Arc::new(StubBackend::new().respond_with(sample_results(1)));
	let backend: Arc<dyn SearchBackend> = stub.clone();
	let mut app = SearchUi::new(backend, routes())
		.with_initial_query("guerra fria")
		.with_theme_name("light")
		.build()
		.expect("app");

	app.hydrate_initial_results();
	settle(&mut app);

	assert_eq!(stub.requests(), vec![SearchRequest::new("guerra fria", 1)]);
	assert_eq!(app.results().len(), 1);
	assert_eq!(app.theme, crate::theme::LIGHT);
}

#[test]
fn narrow_terminals_drop_the_detail_pane() {
	let stub = Arc::new(StubBackend::new().respond_with(sample_results(1)));
	let mut app = app_for(&stub);
	search(&mut app, "bhaskara");

	let mut terminal = Terminal::new(TestBackend::new(60, 16)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	let screen = terminal.backend().to_string();

	assert!(screen.contains("Mapa mental 0"));
	assert!(!screen.contains("Selection"));
}
