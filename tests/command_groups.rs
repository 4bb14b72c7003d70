use pcbedit::command::{CmdTextEdit, CmdTextInsert, CmdTextRemove, UndoStack, remove_texts};
use pcbedit::entity::{Text, TextList, TextListRef, TextRef};
use pcbedit::event::UndoStackEvent;
use pcbedit::geometry::{Alignment, Angle, Length, Point, PositiveLength};
use pcbedit::layer::LayerName;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn create_text(content: &str) -> TextRef {
    Text::new_ref(
        LayerName::top_legend(),
        content,
        Point::ORIGIN,
        Angle::ZERO,
        PositiveLength::from_mm(1.0).unwrap(),
        Alignment::default(),
    )
}

fn create_list(names: &[&str]) -> TextListRef {
    let list: TextListRef = Rc::new(RefCell::new(TextList::new()));
    for name in names {
        list.borrow_mut().push(create_text(name));
    }
    list
}

// Insert-then-edit has a data dependency: the edit only makes sense
// once the element is in the list. Undo must unwind in reverse order.
#[test]
fn test_group_with_dependent_children() {
    init();
    let list = create_list(&[]);
    let text = create_text("REF");
    let mut stack = UndoStack::new();

    stack.begin_cmd_group("Add and Place Text");
    stack.append_to_cmd_group(Box::new(CmdTextInsert::new(list.clone(), text.clone())));
    let mut edit = CmdTextEdit::new(text.clone());
    edit.set_position(Point::from_mm(5.0, 5.0), false);
    stack.append_to_cmd_group(Box::new(edit));
    stack.commit_cmd_group().unwrap();

    assert_eq!(list.borrow().len(), 1);
    assert_eq!(text.borrow().position(), Point::from_mm(5.0, 5.0));
    assert_eq!(stack.undo_text(), Some("Add and Place Text"));

    stack.undo().unwrap();
    assert!(list.borrow().is_empty());
    assert_eq!(text.borrow().position(), Point::ORIGIN);

    stack.redo().unwrap();
    assert_eq!(list.borrow().len(), 1);
    assert_eq!(text.borrow().position(), Point::from_mm(5.0, 5.0));
}

#[test]
fn test_abort_unwinds_immediate_edits() {
    init();
    let text = create_text("REF");
    let mut stack = UndoStack::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    let _sub = stack
        .on_modified()
        .subscribe(move |e| sink.borrow_mut().push(e.clone()));

    stack.begin_cmd_group("Drag Text");
    let mut drag = CmdTextEdit::new(text.clone());
    drag.translate(Length::from_mm(3.0), Length::from_mm(4.0), true);
    assert_eq!(text.borrow().position(), Point::from_mm(3.0, 4.0));
    stack.append_to_cmd_group(Box::new(drag));

    // User pressed escape
    stack.abort_cmd_group();
    assert_eq!(text.borrow().position(), Point::ORIGIN);
    assert!(!stack.can_undo());
    assert_eq!(*events.borrow(), vec![UndoStackEvent::CommandGroupAborted]);
}

#[test]
fn test_remove_selected_items_as_one_unit() {
    init();
    let list = create_list(&["A", "B", "C"]);
    let selected: Vec<Uuid> = [0, 2]
        .iter()
        .map(|&i| list.borrow().get(i).unwrap().borrow().uuid())
        .collect();

    let mut stack = UndoStack::new();
    stack
        .exec_cmd(Box::new(remove_texts(&list, &selected)))
        .unwrap();
    assert_eq!(list.borrow().len(), 1);
    assert_eq!(list.borrow().get(0).unwrap().borrow().text(), "B");

    // One undo step brings both elements back at their old positions
    stack.undo().unwrap();
    assert_eq!(list.borrow().len(), 3);
    assert_eq!(list.borrow().get(0).unwrap().borrow().text(), "A");
    assert_eq!(list.borrow().get(2).unwrap().borrow().text(), "C");
}

#[test]
fn test_failed_group_is_not_recorded() {
    init();
    let list = create_list(&["A"]);
    let a = list.borrow().get(0).unwrap().clone();
    let mut stack = UndoStack::new();

    stack.begin_cmd_group("Remove Twice");
    stack.append_to_cmd_group(Box::new(CmdTextRemove::new(list.clone(), a.clone())));
    stack.append_to_cmd_group(Box::new(CmdTextRemove::new(list.clone(), a)));
    // Second child fails: the element is already gone. Earlier children
    // stay applied, but the group never reaches the history.
    assert!(stack.commit_cmd_group().is_err());
    assert!(!stack.can_undo());
    assert!(stack.is_clean());
    assert!(list.borrow().is_empty());
}

#[test]
fn test_group_of_noop_edits_is_discarded() {
    init();
    let text = create_text("REF");
    let mut stack = UndoStack::new();

    stack.begin_cmd_group("No Changes");
    stack.append_to_cmd_group(Box::new(CmdTextEdit::new(text.clone())));
    let mut edit = CmdTextEdit::new(text);
    edit.set_text("REF", false); // same value
    stack.append_to_cmd_group(Box::new(edit));
    stack.commit_cmd_group().unwrap();

    assert!(!stack.can_undo());
    assert!(stack.is_clean());
}
