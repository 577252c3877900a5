use aido_core::command::CommandConfig;
use aido_core::preprompt::{Preprompt, RegistryError};
use aido_core::store::{MemoryStore, PrepromptStore};

use super::{MemoryClipboard, MemoryField};
use crate::{AiOutcome, KeyboardSession, RequestKind, SessionAction, SessionStores};

fn session_with(config: CommandConfig) -> (KeyboardSession, MemoryStore) {
    let store = MemoryStore::new();
    let stores = SessionStores {
        preprompts: Box::new(store.clone()),
        clipboard: Box::new(store.clone()),
        shortcuts: Box::new(store.clone()),
    };
    (KeyboardSession::new(stores, config), store)
}

fn session() -> (KeyboardSession, MemoryStore) {
    session_with(CommandConfig {
        smart_reply_enabled: true,
        tone_rewrite_enabled: true,
        all_menu_enabled: true,
        search_enabled: true,
        toggle_enabled: true,
        ..CommandConfig::default()
    })
}

fn expect_request(action: SessionAction) -> crate::AiRequest {
    match action {
        SessionAction::Request(r) => r,
        other => panic!("expected request, got {other:?}"),
    }
}

#[test]
fn preprompt_trigger_round_trip() {
    let (mut s, _) = session();
    s.add_preprompt(Preprompt::new(
        "@grammar",
        "Fix grammar, spelling, and punctuation. Return only the corrected text.",
        "",
    ))
    .unwrap();
    let mut field = MemoryField::new("please fix this @grammar");
    let req = expect_request(s.on_text_changed(&mut field));
    assert_eq!(req.kind, RequestKind::Replace);
    assert_eq!(
        req.prompt,
        "Fix grammar, spelling, and punctuation. Return only the corrected text. please fix this"
    );

    let clip = MemoryClipboard::default();
    let outcome = s.on_ai_result(
        req.generation,
        Ok("Please fix this.".to_string()),
        Some(&mut field),
        &clip,
    );
    assert_eq!(outcome, AiOutcome::Applied);
    assert_eq!(field.text, "Please fix this.");
    assert_eq!(field.cursor, 16);

    // The pre-insertion text is one undo away.
    assert!(s.undo(&mut field));
    assert_eq!(field.text, "please fix this @grammar");
}

#[test]
fn same_text_does_not_request_twice() {
    let (mut s, _) = session();
    let mut field = MemoryField::new("hi @fixg");
    expect_request(s.on_text_changed(&mut field));
    assert_eq!(s.on_text_changed(&mut field), SessionAction::None);
}

#[test]
fn superseded_result_is_discarded() {
    let (mut s, _) = session();
    let clip = MemoryClipboard::default();
    let mut field = MemoryField::new("first @fixg");
    let first = expect_request(s.on_text_changed(&mut field));
    field = MemoryField::new("second @fixg");
    let second = expect_request(s.on_text_changed(&mut field));

    let outcome = s.on_ai_result(first.generation, Ok("one".to_string()), Some(&mut field), &clip);
    assert_eq!(outcome, AiOutcome::Discarded);
    assert_eq!(field.text, "second @fixg");

    let outcome = s.on_ai_result(second.generation, Ok("two".to_string()), Some(&mut field), &clip);
    assert_eq!(outcome, AiOutcome::Applied);
    assert_eq!(field.text, "two");
}

#[test]
fn result_after_end_input_is_dropped() {
    let (mut s, _) = session();
    let clip = MemoryClipboard::default();
    let mut field = MemoryField::new("text @fixg");
    let req = expect_request(s.on_text_changed(&mut field));
    s.end_input();
    let outcome = s.on_ai_result(req.generation, Ok("late".to_string()), Some(&mut field), &clip);
    assert_eq!(outcome, AiOutcome::Discarded);
    assert_eq!(field.text, "text @fixg");
    assert_eq!(*clip.content.borrow(), None);
}

#[test]
fn unreadable_field_falls_back_to_clipboard() {
    let (mut s, _) = session();
    let clip = MemoryClipboard::default();
    let mut field = MemoryField::new("text @fixg");
    let req = expect_request(s.on_text_changed(&mut field));
    field.readable = false;
    let outcome = s.on_ai_result(req.generation, Ok("answer".to_string()), Some(&mut field), &clip);
    assert_eq!(outcome, AiOutcome::CopiedToClipboard);
    assert_eq!(clip.content.borrow().as_deref(), Some("answer"));

    let req = {
        field = MemoryField::new("again @fixg");
        expect_request(s.on_text_changed(&mut field))
    };
    let outcome = s.on_ai_result(req.generation, Ok("gone".to_string()), None, &clip);
    assert_eq!(outcome, AiOutcome::CopiedToClipboard);
}

#[test]
fn provider_error_is_reported() {
    let (mut s, _) = session();
    let mut field = MemoryField::new("text @fixg");
    let req = expect_request(s.on_text_changed(&mut field));
    let outcome = s.on_ai_result(
        req.generation,
        Err("401 unauthorized".to_string()),
        Some(&mut field),
        &MemoryClipboard::default(),
    );
    assert_eq!(outcome, AiOutcome::Failed("401 unauthorized".to_string()));
    assert_eq!(field.text, "text @fixg");
}

#[test]
fn tone_rewrite_suggestions_replace_whole_text() {
    let (mut s, _) = session();
    let mut field = MemoryField::new("see you tmrw @tone");
    let req = expect_request(s.on_text_changed(&mut field));
    assert_eq!(req.kind, RequestKind::ToneRewrite);
    assert!(req.prompt.starts_with("Original text: \"see you tmrw\""));

    let outcome = s.on_ai_result(
        req.generation,
        Ok("- \"See you tomorrow.\"\nCatch you later!".to_string()),
        Some(&mut field),
        &MemoryClipboard::default(),
    );
    assert_eq!(
        outcome,
        AiOutcome::Suggestions(vec![
            "See you tomorrow.".to_string(),
            "Catch you later!".to_string()
        ])
    );
    // Suggestions do not touch the field until one is chosen.
    assert_eq!(field.text, "see you tmrw @tone");

    assert!(s.apply_suggestion("See you tomorrow.", &mut field));
    assert_eq!(field.text, "See you tomorrow.");
}

#[test]
fn smart_reply_replaces_trigger() {
    let (mut s, _) = session();
    let mut field = MemoryField::new("ok @reply");
    assert_eq!(s.on_text_changed(&mut field), SessionAction::NeedsScreenContext);
    let req = s.request_smart_reply("Bob: lunch at 1?");
    assert!(req.prompt.starts_with("Context from screen:\nBob: lunch at 1?\n\n"));
    s.on_ai_result(
        req.generation,
        Ok("Sounds good".to_string()),
        Some(&mut field),
        &MemoryClipboard::default(),
    );
    assert!(s.apply_suggestion("Sounds good", &mut field));
    assert_eq!(field.text, "ok Sounds good");
}

#[test]
fn toggle_off_pauses_processing() {
    let (mut s, _) = session();
    let mut field = MemoryField::new("hello @off");
    assert_eq!(s.on_text_changed(&mut field), SessionAction::Toggled { on: false });
    assert_eq!(field.text, "hello");
    assert!(!s.config().app_on);

    let mut field = MemoryField::new("fix @fixg");
    assert_eq!(s.on_text_changed(&mut field), SessionAction::Paused);

    let mut field = MemoryField::new("@on");
    assert_eq!(s.on_text_changed(&mut field), SessionAction::Toggled { on: true });
    assert_eq!(field.text, "");
}

#[test]
fn missing_text_notice() {
    let (mut s, _) = session();
    let mut field = MemoryField::new("@search");
    assert_eq!(
        s.on_text_changed(&mut field),
        SessionAction::Notice("Type something before @search".to_string())
    );
}

#[test]
fn search_and_menu() {
    let (mut s, _) = session();
    let mut field = MemoryField::new("rust lifetimes @search");
    assert_eq!(
        s.on_text_changed(&mut field),
        SessionAction::Search("rust lifetimes".to_string())
    );

    let mut field = MemoryField::new("pick @all");
    let SessionAction::ShowMenu(items) = s.on_text_changed(&mut field) else {
        panic!("expected menu");
    };
    assert_eq!(&items[..3], ["@reply", "@tone", "@search"]);
    assert!(items.contains(&"@fixg".to_string()));

    assert!(s.apply_menu_choice("@fixg", &mut field));
    assert_eq!(field.text, "pick @fixg");
}

#[test]
fn disabled_command_does_nothing() {
    let (mut s, _) = session_with(CommandConfig::default());
    let mut field = MemoryField::new("hello @reply");
    assert_eq!(s.on_text_changed(&mut field), SessionAction::None);
    assert_eq!(field.text, "hello @reply");
}

#[test]
fn shortcut_expands_with_undo() {
    let (mut s, store) = session();
    s.add_shortcut("!addr", "221B Baker Street").unwrap();
    assert_eq!(store.save_count(), 1);

    let mut field = MemoryField::new("I live at !addr");
    assert_eq!(s.on_text_changed(&mut field), SessionAction::ShortcutExpanded);
    assert_eq!(field.text, "I live at 221B Baker Street");
    assert!(s.undo(&mut field));
    assert_eq!(field.text, "I live at !addr");
}

#[test]
fn registry_changes_are_persisted() {
    let (mut s, store) = session();
    s.add_preprompt(Preprompt::new("@mine", "Mine.", "")).unwrap();
    let saved = PrepromptStore::load(&store).unwrap().unwrap();
    assert!(saved.preprompts.iter().any(|p| p.trigger == "@mine"));

    let err = s.add_preprompt(Preprompt::new("@mine", "Again.", "")).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateTrigger("@mine".to_string()));
    assert_eq!(store.save_count(), 1);

    s.delete_preprompt("@mine").unwrap();
    s.reset_preprompts();
    assert_eq!(store.save_count(), 3);
}

#[test]
fn import_replaces_library() {
    let (mut s, _) = session();
    let n = s
        .import_preprompts(r#"[{"trigger": "@only", "instruction": "Only me."}]"#)
        .unwrap();
    assert_eq!(n, 1);
    assert_eq!(s.registry().len(), 1);
    assert!(s.import_preprompts("[]").is_err());
    assert_eq!(s.registry().len(), 1);
}

#[test]
fn reloads_saved_state() {
    let store = MemoryStore::new();
    let stores = || SessionStores {
        preprompts: Box::new(store.clone()),
        clipboard: Box::new(store.clone()),
        shortcuts: Box::new(store.clone()),
    };
    {
        let mut s = KeyboardSession::new(stores(), CommandConfig::default());
        s.add_preprompt(Preprompt::new("@kept", "Kept.", "")).unwrap();
        s.clipboard_mut().add_at("copied", 5);
        s.add_shortcut("!x", "expanded").unwrap();
    }
    let s = KeyboardSession::new(stores(), CommandConfig::default());
    assert!(s.registry().get("@kept").is_some());
    assert_eq!(s.clipboard().get(0).unwrap().text, "copied");
    assert_eq!(s.shortcuts().len(), 1);
}

#[test]
fn word_suggestions_at_cursor() {
    let (s, _) = session();
    let field = MemoryField::new("I think th");
    assert_eq!(
        s.word_suggestions(&field),
        vec!["the", "this", "than", "that", "them", "then"]
    );
    assert!(s.word_suggestions(&MemoryField::new("done ")).is_empty());
}

#[test]
fn start_input_clears_history() {
    let (mut s, _) = session();
    s.save_state("a", 1);
    assert!(s.history().can_undo());
    s.start_input();
    assert!(!s.history().can_undo());
}
