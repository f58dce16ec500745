//! Completion detection and one-shot latch tests.

use crate::board::{
    domain::{Board, ColumnId, Task, TaskDraft},
    services::{CompletionLatch, is_fully_complete},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

/// Builds a task with the given title and default remaining fields.
fn task(title: &str) -> Task {
    Task::new(TaskDraft::new(title), &DefaultClock).expect("valid task draft")
}

/// Seven tasks, all in the terminal column.
#[fixture]
fn all_done_board() -> Board {
    Board::from_seed((1..=7).map(|n| (ColumnId::Done, task(&format!("Task {n}")))))
}

#[rstest]
fn all_tasks_done_is_fully_complete(all_done_board: Board) {
    assert!(is_fully_complete(&all_done_board));
}

#[rstest]
fn one_task_outside_done_is_not_complete(all_done_board: Board) {
    let straggler = all_done_board
        .column(ColumnId::Done)
        .tasks()
        .first()
        .map(Task::id)
        .expect("seeded board has tasks");
    let mut board = all_done_board;
    board.transfer(straggler, ColumnId::Done, ColumnId::Todo);

    assert!(!is_fully_complete(&board));
}

#[rstest]
fn empty_board_is_not_complete() {
    assert!(!is_fully_complete(&Board::new()));
}

#[rstest]
fn latch_fires_once_per_transition(all_done_board: Board) {
    let mut latch = CompletionLatch::new();

    assert!(!latch.observe(&Board::new()));
    assert!(latch.observe(&all_done_board));
    // Still complete on the next evaluation: no re-fire.
    assert!(!latch.observe(&all_done_board));
}

/// Evaluates the latch through a mutable borrow, as a caller helper would.
fn observe_via_helper(latch: &mut CompletionLatch, board: &Board) -> bool {
    latch.observe(board)
}

#[rstest]
fn latch_advances_through_borrows_without_forking_state(all_done_board: Board) {
    let mut latch = CompletionLatch::new();

    assert!(observe_via_helper(&mut latch, &all_done_board));
    // The helper advanced the caller's latch, not a detached copy.
    assert!(!latch.observe(&all_done_board));
}

#[rstest]
fn latch_rearms_when_completion_is_lost(all_done_board: Board) {
    let mut latch = CompletionLatch::new();
    assert!(latch.observe(&all_done_board));

    let straggler = all_done_board
        .column(ColumnId::Done)
        .tasks()
        .first()
        .map(Task::id)
        .expect("seeded board has tasks");
    let mut board = all_done_board.clone();
    board.transfer(straggler, ColumnId::Done, ColumnId::Todo);
    assert!(!latch.observe(&board));

    board.transfer(straggler, ColumnId::Todo, ColumnId::Done);
    assert!(latch.observe(&board));
}
