//! Table projection tests: flattening, filtering, sorting, toggling.

use crate::board::{
    domain::{Board, ColumnId, Priority, Task, TaskDraft},
    services::{SortDirection, SortKey, SortState, StatusFilter, project},
};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

/// Builds a task with a title and an ISO due date.
fn dated_task(title: &str, iso_date: &str) -> Task {
    let due = iso_date.parse::<NaiveDate>().expect("valid ISO date");
    Task::new(TaskDraft::new(title).with_due_date(due), &DefaultClock).expect("valid task draft")
}

/// Builds a task with a title only.
fn task(title: &str) -> Task {
    Task::new(TaskDraft::new(title), &DefaultClock).expect("valid task draft")
}

/// The seven-task sample board: two tasks in `done`, five elsewhere.
#[fixture]
fn sample_board() -> Board {
    Board::from_seed([
        (ColumnId::Todo, dated_task("Research competitors", "2023-12-10")),
        (ColumnId::Todo, dated_task("Create wireframes", "2023-12-05")),
        (
            ColumnId::InProgress,
            dated_task("Develop API endpoints", "2023-12-08"),
        ),
        (
            ColumnId::InProgress,
            dated_task("Design system setup", "2023-12-03"),
        ),
        (ColumnId::Review, dated_task("Code review", "2023-12-02")),
        (ColumnId::Done, dated_task("Project setup", "2023-11-28")),
        (
            ColumnId::Done,
            dated_task("Requirements gathering", "2023-11-25"),
        ),
    ])
}

/// Board with duplicate due dates for tie-break checks: due dates
/// `["2023-12-10", "2023-12-05", "2023-12-05"]` with "Tie A" before "Tie B".
#[fixture]
fn tie_board() -> Board {
    Board::from_seed([
        (ColumnId::Todo, dated_task("Latest", "2023-12-10")),
        (ColumnId::Todo, dated_task("Tie A", "2023-12-05")),
        (ColumnId::Todo, dated_task("Tie B", "2023-12-05")),
    ])
}

/// Projects and returns just the row titles, for order assertions.
fn titles(board: &Board, filter: StatusFilter, sort: SortState) -> Vec<String> {
    project(board, filter, sort)
        .into_iter()
        .map(|row| row.task.title().as_str().to_owned())
        .collect()
}

#[rstest]
fn unsorted_projection_preserves_board_order(sample_board: Board) {
    let rows = project(&sample_board, StatusFilter::All, SortState::UNSORTED);

    assert_eq!(rows.len(), 7);
    let statuses: Vec<&str> = rows.iter().map(|row| row.status).collect();
    assert_eq!(
        statuses,
        vec![
            "To Do",
            "To Do",
            "In Progress",
            "In Progress",
            "Review",
            "Done",
            "Done"
        ]
    );
}

#[rstest]
fn filter_narrows_to_done_tasks(sample_board: Board) {
    let rows = project(
        &sample_board,
        StatusFilter::Column(ColumnId::Done),
        SortState::UNSORTED,
    );

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.status == "Done"));
    let row_titles: Vec<&str> = rows.iter().map(|row| row.task.title().as_str()).collect();
    assert_eq!(row_titles, vec!["Project setup", "Requirements gathering"]);
}

#[rstest]
fn due_date_sort_is_stable_ascending(tie_board: Board) {
    let mut sort = SortState::UNSORTED;
    sort.toggle(SortKey::DueDate);

    assert_eq!(
        titles(&tie_board, StatusFilter::All, sort),
        vec!["Tie A", "Tie B", "Latest"]
    );
}

#[rstest]
fn toggling_due_date_again_flips_to_descending_keeping_tie_order(tie_board: Board) {
    let mut sort = SortState::UNSORTED;
    sort.toggle(SortKey::DueDate);
    sort.toggle(SortKey::DueDate);

    assert_eq!(sort.direction(), SortDirection::Descending);
    assert_eq!(
        titles(&tie_board, StatusFilter::All, sort),
        vec!["Latest", "Tie A", "Tie B"]
    );
}

#[rstest]
fn selecting_a_new_key_resets_to_ascending() {
    let mut sort = SortState::UNSORTED;
    sort.toggle(SortKey::DueDate);
    sort.toggle(SortKey::DueDate);
    assert_eq!(sort.direction(), SortDirection::Descending);

    sort.toggle(SortKey::Title);

    assert_eq!(sort.key(), Some(SortKey::Title));
    assert_eq!(sort.direction(), SortDirection::Ascending);
}

#[rstest]
fn title_sort_is_lexical(sample_board: Board) {
    let sort = SortState::new(SortKey::Title, SortDirection::Ascending);

    assert_eq!(
        titles(&sample_board, StatusFilter::All, sort),
        vec![
            "Code review",
            "Create wireframes",
            "Design system setup",
            "Develop API endpoints",
            "Project setup",
            "Requirements gathering",
            "Research competitors"
        ]
    );
}

#[rstest]
fn priority_sort_compares_rendered_labels() {
    // Lexical label order is the table-view contract: High < Low < Medium.
    let board = Board::from_seed([
        (
            ColumnId::Todo,
            Task::new(
                TaskDraft::new("M task").with_priority(Priority::Medium),
                &DefaultClock,
            )
            .expect("valid task draft"),
        ),
        (
            ColumnId::Todo,
            Task::new(
                TaskDraft::new("H task").with_priority(Priority::High),
                &DefaultClock,
            )
            .expect("valid task draft"),
        ),
        (
            ColumnId::Todo,
            Task::new(
                TaskDraft::new("L task").with_priority(Priority::Low),
                &DefaultClock,
            )
            .expect("valid task draft"),
        ),
    ]);
    let sort = SortState::new(SortKey::Priority, SortDirection::Ascending);

    assert_eq!(
        titles(&board, StatusFilter::All, sort),
        vec!["H task", "L task", "M task"]
    );
}

#[rstest]
fn undated_tasks_sort_before_dated_ones() {
    let board = Board::from_seed([
        (ColumnId::Todo, dated_task("Dated", "2023-12-01")),
        (ColumnId::Todo, task("Undated")),
    ]);
    let sort = SortState::new(SortKey::DueDate, SortDirection::Ascending);

    assert_eq!(
        titles(&board, StatusFilter::All, sort),
        vec!["Undated", "Dated"]
    );
}

#[rstest]
fn projection_does_not_mutate_the_board(sample_board: Board) {
    let before = sample_board.clone();
    let sort = SortState::new(SortKey::DueDate, SortDirection::Descending);

    let _rows = project(&sample_board, StatusFilter::All, sort);

    assert_eq!(sample_board, before);
}

#[rstest]
fn table_rows_serialise_with_status_and_iso_date(sample_board: Board) {
    let rows = project(
        &sample_board,
        StatusFilter::Column(ColumnId::Done),
        SortState::UNSORTED,
    );
    let json = serde_json::to_value(rows.first().expect("one done row")).expect("serialisable row");

    assert_eq!(json.get("status"), Some(&serde_json::json!("Done")));
    assert_eq!(json.get("title"), Some(&serde_json::json!("Project setup")));
    assert_eq!(
        json.get("due_date"),
        Some(&serde_json::json!("2023-11-28"))
    );
}
