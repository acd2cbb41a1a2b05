mod common;

use plotter::canvas::Board;
use plotter::client::PointClient;
use plotter::menu::{self, MenuAction, EMPTY_MESSAGE};
use plotter::store::Point;

use common::{Level, RecordingNotifier};

#[test]
fn plotted_points_with_empty_store() {
    let (_server, client) = common::start();
    let notifier = RecordingNotifier::default();

    menu::show_plotted_points(&client, &notifier);

    let (level, title, body) = notifier.single();
    assert_eq!(level, Level::Info);
    assert_eq!(title, "Plotted Points");
    assert_eq!(body, EMPTY_MESSAGE);
}

#[test]
fn plotted_points_lists_one_line_per_point() {
    let (_server, client) = common::start();
    let notifier = RecordingNotifier::default();

    client.save_point(Point::new(20.0, 40.0)).unwrap();
    client.save_point(Point::new(-100.0, -60.0)).unwrap();
    client.save_point(Point::new(0.0, 0.0)).unwrap();

    menu::show_plotted_points(&client, &notifier);

    let (level, _, body) = notifier.single();
    assert_eq!(level, Level::Info);

    let lines = body.lines().collect::<Vec<_>>();
    assert_eq!(lines, vec!["Plotted Points:", "(20.0, 40.0)", "(-100.0, -60.0)", "(0.0, 0.0)"]);
}

#[test]
fn plotted_points_reports_unreachable_store() {
    let client = PointClient::new(format!("http://{}", common::closed_addr())).unwrap();
    let notifier = RecordingNotifier::default();

    menu::show_plotted_points(&client, &notifier);

    let (level, title, body) = notifier.single();
    assert_eq!(level, Level::Error);
    assert_eq!(title, "Error");
    assert!(body.starts_with("Error connecting to backend: "));
}

#[test]
fn plotted_points_reports_failed_response() {
    let (server, _client) = common::start();
    let client = PointClient::new(format!("{}/missing", server.url())).unwrap();
    let notifier = RecordingNotifier::default();

    menu::show_plotted_points(&client, &notifier);

    let (level, title, body) = notifier.single();
    assert_eq!(level, Level::Warning);
    assert_eq!(title, "Error");
    assert!(body.starts_with("Failed to load points: "));
}

#[test]
fn home_replots_stored_points() {
    let (_server, client) = common::start();
    let notifier = RecordingNotifier::default();

    client.save_point(Point::new(20.0, 40.0)).unwrap();
    client.save_point(Point::new(-300.0, -300.0)).unwrap();

    let mut board = Board::default();
    board.plot(cgmath::Point2::new(1.0, 1.0));

    menu::perform(MenuAction::Home, &mut board, &client, &notifier);

    let markers = board.markers().copied().collect::<Vec<_>>();
    assert_eq!(markers, vec![cgmath::Point2::new(320.0, 260.0), cgmath::Point2::new(0.0, 600.0)]);
    assert!(notifier.shown.borrow().is_empty());
}

#[test]
fn home_with_unreachable_store_leaves_bare_grid() {
    let client = PointClient::new(format!("http://{}", common::closed_addr())).unwrap();
    let notifier = RecordingNotifier::default();

    let mut board = Board::default();
    board.plot(cgmath::Point2::new(1.0, 1.0));

    menu::home(&mut board, &client);

    assert!(board.is_empty());
    assert!(notifier.shown.borrow().is_empty());
}
