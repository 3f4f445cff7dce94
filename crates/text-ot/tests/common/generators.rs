//! Random ops for the property and convergence tests.

use text_ot::component::append;
use text_ot::text::{self, TextComponent, TextOp};
use text_ot::text_tp2::{Tp2Component, Tp2Doc, Tp2Op};
use text_ot_util::strings::char_slice;
use text_ot_util::Fuzzer;

/// A random single flat component valid against `doc`.
pub fn flat_component(fuzzer: &mut Fuzzer, doc: &str, with_comments: bool) -> TextComponent {
    let len = doc.chars().count();
    let kinds: &[&str] = if with_comments { &["insert", "delete", "comment"] } else { &["insert", "delete"] };
    let kind = if len == 0 { "insert" } else { *fuzzer.pick(kinds) };
    match kind {
        "insert" => {
            let pos = fuzzer.position(len);
            let mut c = TextComponent::insert(pos, fuzzer.random_text(4));
            if fuzzer.random_bool(0.2) {
                c = c.with_undo();
            }
            c
        }
        "delete" => {
            let (start, end) = fuzzer.span(len);
            TextComponent::delete(start, char_slice(doc, start, end))
        }
        _ => {
            let (start, end) = fuzzer.span(len);
            TextComponent::comment(start, char_slice(doc, start, end)).with_thread("thread-1")
        }
    }
}

/// A random flat op of 1..=`max_components` components valid against `doc`.
/// Each component is drawn against the document left by the previous ones.
pub fn flat_op(fuzzer: &mut Fuzzer, doc: &str, max_components: usize, with_comments: bool) -> TextOp {
    let mut op = TextOp::new();
    let mut current = doc.to_string();
    for _ in 0..fuzzer.random_int(1, max_components) {
        let c = flat_component(fuzzer, &current, with_comments);
        current = text::apply(&current, std::slice::from_ref(&c)).expect("generated component applies");
        op.push(c);
    }
    op
}

/// A random tp2 document with some tombstones in it.
pub fn tp2_doc(fuzzer: &mut Fuzzer) -> Tp2Doc {
    let mut doc = Tp2Doc::new();
    for _ in 0..fuzzer.random_int(0, 4) {
        let part = if fuzzer.random_bool(0.6) {
            text_ot::text_tp2::DocPart::Text(fuzzer.random_text(5))
        } else {
            text_ot::text_tp2::DocPart::Tombs(fuzzer.random_int(1, 3))
        };
        text_ot::text_tp2::doc::append_doc(&mut doc, part);
    }
    doc
}

fn tp2_insert(fuzzer: &mut Fuzzer) -> Tp2Component {
    if fuzzer.random_bool(0.8) {
        Tp2Component::Insert(fuzzer.random_text(3))
    } else {
        Tp2Component::InsertTombs(fuzzer.random_int(1, 2))
    }
}

/// A random tp2 op spanning a document of `total_length` positions.
pub fn tp2_op(fuzzer: &mut Fuzzer, total_length: usize) -> Tp2Op {
    let mut op = Tp2Op::new();
    let mut remaining = total_length;
    while remaining > 0 {
        let n = fuzzer.random_int(1, remaining);
        match fuzzer.random_int(0, 2) {
            0 => append(&mut op, Tp2Component::Skip(n)),
            1 => append(&mut op, Tp2Component::Delete(n)),
            _ => {
                append(&mut op, tp2_insert(fuzzer));
                continue;
            }
        }
        remaining -= n;
    }
    if fuzzer.random_bool(0.3) {
        append(&mut op, tp2_insert(fuzzer));
    }
    op
}
