use tasktally::config::Config;
use tasktally::context::TestContext;
use tasktally::controller::Controller;
use tasktally::storage::Storage;
use tasktally::ui::{EXIT_MESSAGE, Transcript};

fn open(ctx: &TestContext) -> Controller {
    let storage = Storage::from_config(ctx, &Config::default()).unwrap();
    Controller::open(storage).unwrap()
}

fn say(controller: &mut Controller, ui: &mut Transcript, line: &str) -> String {
    controller.handle(line, ui);
    ui.take_reply()
}

#[test]
fn test_find_only_returns_matches() {
    let ctx = TestContext::new();
    let mut c = open(&ctx);
    let mut ui = Transcript::new();
    say(&mut c, &mut ui, "TODO read book");
    say(&mut c, &mut ui, "TODO buy milk");
    say(&mut c, &mut ui, "DEADLINE return book /by 2024-01-01 18:00");

    let reply = say(&mut c, &mut ui, "FIND book");
    assert!(reply.contains("1. [T][ ] read book"));
    assert!(reply.contains("3. [D][ ] return book"));
    assert!(!reply.contains("milk"));

    let reply = say(&mut c, &mut ui, "FIND eggs");
    assert_eq!(reply, "No tasks match your search.");
}

#[test]
fn test_delete_out_of_range_does_not_mutate() {
    let ctx = TestContext::new();
    let mut c = open(&ctx);
    let mut ui = Transcript::new();
    say(&mut c, &mut ui, "TODO one");
    say(&mut c, &mut ui, "TODO two");
    let before = c.tasks().clone();

    let reply = say(&mut c, &mut ui, "DELETE 3");
    assert!(reply.starts_with("OOPS!"));
    assert!(reply.contains("no task number 3"));
    let reply = say(&mut c, &mut ui, "DELETE 0");
    assert!(reply.starts_with("OOPS!"));
    assert_eq!(c.tasks(), &before);

    // The file on disk still has both tasks too.
    assert_eq!(open(&ctx).tasks(), &before);
}

#[test]
fn test_changes_persist_across_sessions() {
    let ctx = TestContext::new();
    {
        let mut c = open(&ctx);
        let mut ui = Transcript::new();
        say(&mut c, &mut ui, "TODO alpha");
        say(&mut c, &mut ui, "TODO beta");
        say(&mut c, &mut ui, "TODO gamma");
        say(&mut c, &mut ui, "DONE 3");
        let reply = say(&mut c, &mut ui, "DELETE 1");
        assert!(reply.contains("Now you have 2 tasks in the list."));
        say(&mut c, &mut ui, "EXPENSE 4.5 /dollars coffee /on 2024-03-01");
    }

    let c = open(&ctx);
    let names: Vec<_> = c.tasks().as_slice().iter().map(|t| t.description.as_str()).collect();
    assert_eq!(names, vec!["beta", "gamma"]);
    assert!(c.tasks().get(2).unwrap().done);
    assert_eq!(c.expenses().len(), 1);
}

#[test]
fn test_errors_do_not_end_session() {
    let ctx = TestContext::new();
    let mut c = open(&ctx);
    let mut ui = Transcript::new();

    assert!(!c.handle("", &mut ui));
    assert!(!c.handle("DONE abc", &mut ui));
    assert!(!c.handle("NOPE", &mut ui));
    assert_eq!(ui.messages.len(), 3);
    assert!(ui.messages.iter().all(|m| m.starts_with("OOPS!")));

    assert!(c.handle("BYE", &mut ui));
    assert_eq!(ui.last(), Some(EXIT_MESSAGE));
}

#[test]
fn test_list_views() {
    let ctx = TestContext::new();
    let mut c = open(&ctx);
    let mut ui = Transcript::new();

    assert_eq!(say(&mut c, &mut ui, "LIST"), "Your task list is empty.");
    say(&mut c, &mut ui, "TODO buy milk");
    say(&mut c, &mut ui, "DONE 1");
    assert_eq!(
        say(&mut c, &mut ui, "LIST tasks"),
        "Here are the tasks in your list:\n1. [T][X] buy milk"
    );

    say(&mut c, &mut ui, "EXPENSE 3 /dollars tea /on 2024-01-01");
    say(&mut c, &mut ui, "EXPENSE 2.25 /dollars cake /on 2024-01-02");
    let reply = say(&mut c, &mut ui, "LIST expenses");
    assert!(reply.contains("1. [$] $3.00 tea (on: Jan 1 2024)"));
    assert!(reply.ends_with("Total: $5.25"));
}

#[test]
fn test_failed_save_keeps_session_alive() {
    let ctx = TestContext::new();
    let task_path = ctx.root.join("tasks.txt");
    let storage = Storage::new(&task_path, ctx.root.join("expenses.txt"));
    let mut c = Controller::open(storage).unwrap();
    let mut ui = Transcript::new();

    // A directory where the save file should be makes every save fail.
    std::fs::create_dir_all(&task_path).unwrap();
    let reply = say(&mut c, &mut ui, "TODO still works");
    assert!(reply.contains("Got it."));
    assert_eq!(c.tasks().len(), 1);
    assert!(!c.handle("LIST", &mut ui));
}

#[test]
fn test_run_stops_at_bye_or_eof() {
    let ctx = TestContext::new();
    let mut c = open(&ctx);
    let mut ui = Transcript::new();
    let input = "TODO one\nBYE\nTODO never\n";
    c.run(input.as_bytes(), &mut ui).unwrap();
    assert_eq!(c.tasks().len(), 1);
    assert_eq!(ui.last(), Some(EXIT_MESSAGE));

    let mut ui = Transcript::new();
    c.run("TODO two\n".as_bytes(), &mut ui).unwrap();
    assert_eq!(c.tasks().len(), 2);
    assert_eq!(ui.last(), Some(EXIT_MESSAGE));
}

#[test]
fn test_input_that_is_not_utf8_is_reported_and_skipped() {
    let ctx = TestContext::new();
    let mut c = open(&ctx);
    let mut ui = Transcript::new();
    let input: &[u8] = b"TODO one\nTODO caf\xe9\nTODO two\nBYE\n";
    c.run(input, &mut ui).unwrap();

    let names: Vec<_> = c.tasks().as_slice().iter().map(|t| t.description.as_str()).collect();
    assert_eq!(names, vec!["one", "two"]);
    assert!(ui.messages[1].starts_with("OOPS!"));
    assert_eq!(ui.last(), Some(EXIT_MESSAGE));
}

#[test]
fn test_find_is_case_sensitive() {
    let ctx = TestContext::new();
    let mut c = open(&ctx);
    let mut ui = Transcript::new();
    say(&mut c, &mut ui, "TODO Book club");
    say(&mut c, &mut ui, "TODO read book");

    let reply = say(&mut c, &mut ui, "FIND book");
    assert_eq!(
        reply,
        "Here are the matching tasks in your list:\n2. [T][ ] read book"
    );
}
