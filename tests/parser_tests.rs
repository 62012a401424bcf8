use chrono::{NaiveDate, NaiveDateTime};
use tasktally::command::Command;
use tasktally::error::TallyError;
use tasktally::model::{Expense, Task, TaskKind, parse};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn added_task(input: &str) -> Task {
    match parse(input) {
        Ok(Command::AddTask(task)) => task,
        other => panic!("Expected AddTask for {:?}, got {:?}", input, other),
    }
}

#[test]
fn test_todo() {
    let task = added_task("TODO buy milk");
    assert_eq!(task.description, "buy milk");
    assert!(!task.done);
    assert_eq!(task.kind, TaskKind::Todo);
}

#[test]
fn test_instruction_case_and_whitespace() {
    let task = added_task("  todo   buy milk  ");
    assert_eq!(task.description, "buy milk");
    let task = added_task("TODO\tbuy milk");
    assert_eq!(task.description, "buy milk");
}

#[test]
fn test_todo_needs_description() {
    assert_eq!(parse("TODO"), Err(TallyError::EmptyDescription));
    assert_eq!(parse("TODO    "), Err(TallyError::EmptyDescription));
}

#[test]
fn test_deadline() {
    let task = added_task("DEADLINE return book /by 2024-01-01 18:00");
    assert_eq!(task.description, "return book");
    assert_eq!(
        task.kind,
        TaskKind::Deadline {
            by: at(2024, 1, 1, 18, 0)
        }
    );
}

#[test]
fn test_deadline_missing_marker() {
    match parse("DEADLINE return book 2024-01-01 18:00") {
        Err(TallyError::Format(hint)) => assert!(hint.contains("/by")),
        other => panic!("Expected a format hint, got {:?}", other),
    }
    assert_eq!(parse("DEADLINE"), Err(TallyError::EmptyDescription));
    assert_eq!(
        parse("DEADLINE  /by 2024-01-01 18:00"),
        Err(TallyError::EmptyDescription)
    );
}

#[test]
fn test_deadline_bad_datetime_names_pattern() {
    match parse("DEADLINE return book /by tomorrow") {
        Err(TallyError::Format(hint)) => assert!(hint.contains("yyyy-MM-dd HH:mm")),
        other => panic!("Expected a format hint, got {:?}", other),
    }
    assert!(parse("DEADLINE return book /by 2024-13-01 18:00").is_err());
}

#[test]
fn test_event() {
    let task = added_task("EVENT team dinner /at 2024-02-02 19:00 /to 2024-02-02 22:30");
    assert_eq!(task.description, "team dinner");
    assert_eq!(
        task.kind,
        TaskKind::Event {
            start: at(2024, 2, 2, 19, 0),
            end: at(2024, 2, 2, 22, 30)
        }
    );
}

#[test]
fn test_event_errors() {
    assert!(matches!(
        parse("EVENT dinner /at 2024-02-02 19:00"),
        Err(TallyError::Format(_))
    ));
    assert!(matches!(
        parse("EVENT dinner 2024-02-02 19:00 /to 2024-02-02 22:00"),
        Err(TallyError::Format(_))
    ));
    match parse("EVENT dinner /at 2024-02-02 22:00 /to 2024-02-02 19:00") {
        Err(TallyError::Format(hint)) => assert!(hint.contains("end before")),
        other => panic!("Expected ordering error, got {:?}", other),
    }
}

#[test]
fn test_expense() {
    match parse("EXPENSE 12.50 /dollars lunch with Sam /on 2024-01-03") {
        Ok(Command::AddExpense(e)) => assert_eq!(
            e,
            Expense::new("lunch with Sam", 12.5, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())
        ),
        other => panic!("Expected AddExpense, got {:?}", other),
    }
}

#[test]
fn test_expense_errors() {
    assert_eq!(parse("EXPENSE"), Err(TallyError::EmptyDescription));
    assert_eq!(
        parse("EXPENSE ten /dollars lunch /on 2024-01-03"),
        Err(TallyError::InvalidAmount)
    );
    assert_eq!(
        parse("EXPENSE inf /dollars lunch /on 2024-01-03"),
        Err(TallyError::InvalidAmount)
    );
    assert!(matches!(
        parse("EXPENSE 10 lunch /on 2024-01-03"),
        Err(TallyError::Format(_))
    ));
    assert!(matches!(
        parse("EXPENSE 10 /dollars lunch"),
        Err(TallyError::Format(_))
    ));
    match parse("EXPENSE 10 /dollars lunch /on 03/01/2024") {
        Err(TallyError::Format(hint)) => assert!(hint.contains("yyyy-MM-dd")),
        other => panic!("Expected date hint, got {:?}", other),
    }
}

#[test]
fn test_index_commands() {
    assert_eq!(parse("DONE 2"), Ok(Command::Mark(2)));
    assert_eq!(parse("delete 10"), Ok(Command::Delete(10)));
    assert_eq!(parse("DONE abc"), Err(TallyError::InvalidIndex));
    assert_eq!(parse("DONE -1"), Err(TallyError::InvalidIndex));
    assert_eq!(parse("DONE"), Err(TallyError::EmptyIndex));
    assert_eq!(parse("DELETE "), Err(TallyError::EmptyIndex));
}

#[test]
fn test_list_find_bye() {
    assert_eq!(parse("LIST"), Ok(Command::ListTasks));
    assert_eq!(parse("list Tasks"), Ok(Command::ListTasks));
    assert_eq!(parse("LIST expenses"), Ok(Command::ListExpenses));
    assert!(matches!(parse("LIST everything"), Err(TallyError::Format(_))));

    assert_eq!(parse("FIND book"), Ok(Command::Find("book".to_string())));
    assert_eq!(parse("FIND"), Err(TallyError::EmptySearch));

    assert_eq!(parse("BYE"), Ok(Command::Exit));
    assert!(parse("bye now").unwrap().is_exit());
}

#[test]
fn test_empty_and_unknown() {
    assert_eq!(parse(""), Err(TallyError::EmptyCommand));
    assert_eq!(parse("   "), Err(TallyError::EmptyCommand));
    assert_eq!(parse("FROBNICATE now"), Err(TallyError::CommandNotFound));
}

#[test]
fn test_pipe_in_description_rejected() {
    assert!(matches!(parse("TODO a | b"), Err(TallyError::Format(_))));
    assert!(matches!(
        parse("DEADLINE x|y /by 2024-01-01 10:00"),
        Err(TallyError::Format(_))
    ));
}
