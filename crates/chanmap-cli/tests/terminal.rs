use chanmap_cli::terminal::TerminalShell;
use chanmap_core::{Choice, ProgressUpdate, Shell};

fn shell(input: &str) -> TerminalShell<&[u8], Vec<u8>> {
    TerminalShell::new(input.as_bytes(), Vec::new()).without_progress_bar()
}

fn output(shell: TerminalShell<&[u8], Vec<u8>>) -> String {
    String::from_utf8(shell.into_output()).unwrap()
}

fn providers() -> Vec<Choice> {
    vec![
        Choice::new("p1", "xmltv /data/guide.xml"),
        Choice::new("p2", "schedulesdirect"),
    ]
}

#[test]
fn choice_by_number_returns_value() {
    let mut shell = shell("2\n");
    let selected = shell
        .present_choice("EPG Guide", "Which guide?", &providers())
        .unwrap();
    assert_eq!(selected.as_deref(), Some("p2"));

    let text = output(shell);
    assert!(text.contains("xmltv /data/guide.xml"));
    assert!(text.contains("schedulesdirect"));
}

#[test]
fn invalid_choice_prompts_again() {
    let mut shell = shell("9\np1\n");
    let selected = shell
        .present_choice("EPG Guide", "Which guide?", &providers())
        .unwrap();
    assert_eq!(selected.as_deref(), Some("p1"));
    assert!(output(shell).contains("`9` is not one of the listed choices."));
}

#[test]
fn end_of_input_cancels_choice() {
    let mut shell = shell("");
    let selected = shell
        .present_choice("EPG Guide", "Which guide?", &providers())
        .unwrap();
    assert_eq!(selected, None);
}

#[test]
fn blank_text_cancels() {
    let mut shell = shell("   \n");
    assert_eq!(shell.request_text("Create matches CSV", "File name:").unwrap(), None);
}

#[test]
fn text_answer_is_trimmed() {
    let mut shell = shell("  matches.csv \n");
    assert_eq!(
        shell
            .request_text("Create matches CSV", "File name:")
            .unwrap()
            .as_deref(),
        Some("matches.csv")
    );
}

#[test]
fn message_and_progress_output() {
    let mut shell = shell("");
    shell
        .show_message("EPG Guide", "We pulled 3 current mappings.")
        .unwrap();
    shell
        .show_progress(ProgressUpdate::Advanced { processed: 1 })
        .unwrap();
    shell
        .show_progress(ProgressUpdate::Finished { processed: 1 })
        .unwrap();

    insta::assert_snapshot!(output(shell), @r"
    EPG Guide: We pulled 3 current mappings.
    Sent 1 mapping rows.
    ");
}
