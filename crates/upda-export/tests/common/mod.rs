#![allow(dead_code)]

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

/// Write a letter-size template with one text line per page.
pub fn write_template(path: &Path, lines: &[&str]) {
    let mut doc = template_document(lines, false);
    doc.save(path).unwrap();
}

/// Like [`write_template`], but the font resources live on the page tree
/// node and are inherited by the page.
pub fn write_template_with_inherited_resources(path: &Path, text: &str) {
    let mut doc = template_document(&[text], true);
    doc.save(path).unwrap();
}

fn template_document(lines: &[&str], inherit_resources: bool) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources = dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    };

    let mut kids: Vec<Object> = Vec::new();
    for line in lines {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 18.into()]),
                Operation::new("Td", vec![72.into(), 740.into()]),
                Operation::new("Tj", vec![Object::string_literal(*line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        if !inherit_resources {
            page.set("Resources", resources.clone());
        }
        kids.push(doc.add_object(page).into());
    }

    let mut pages = dictionary! {
        "Type" => "Pages",
        "Count" => kids.len() as i64,
        "Kids" => kids,
    };
    if inherit_resources {
        pages.set("Resources", resources);
    }
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

pub fn first_page(doc: &Document) -> ObjectId {
    *doc.get_pages().values().next().unwrap()
}

pub fn number(obj: &Object) -> f32 {
    match obj {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r as f32,
        other => panic!("not a number: {other:?}"),
    }
}

pub fn media_box(doc: &Document, page: ObjectId) -> Vec<f32> {
    doc.get_dictionary(page)
        .unwrap()
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(number)
        .collect()
}

/// Raw bytes of every `Tj` operand in a content stream, in drawing order.
pub fn shown_bytes(content: &[u8]) -> Vec<Vec<u8>> {
    Content::decode(content)
        .unwrap()
        .operations
        .into_iter()
        .filter(|op| op.operator == "Tj")
        .map(|op| match &op.operands[0] {
            Object::String(bytes, _) => bytes.clone(),
            other => panic!("unexpected Tj operand: {other:?}"),
        })
        .collect()
}

/// Like [`shown_bytes`], for ASCII-only content.
pub fn shown_text(content: &[u8]) -> Vec<String> {
    shown_bytes(content)
        .into_iter()
        .map(|bytes| String::from_utf8(bytes).unwrap())
        .collect()
}

/// `(x, y)` of every `Td` in a content stream.
pub fn text_positions(content: &[u8]) -> Vec<(f32, f32)> {
    Content::decode(content)
        .unwrap()
        .operations
        .into_iter()
        .filter(|op| op.operator == "Td")
        .map(|op| (number(&op.operands[0]), number(&op.operands[1])))
        .collect()
}

pub fn page_resources(doc: &Document, page: ObjectId) -> Dictionary {
    match doc.get_dictionary(page).unwrap().get(b"Resources").unwrap() {
        Object::Reference(id) => doc.get_dictionary(*id).unwrap().clone(),
        Object::Dictionary(dict) => dict.clone(),
        other => panic!("unexpected resources: {other:?}"),
    }
}

/// Decoded content of the form XObject registered under `name` on `page`.
pub fn form_content(doc: &Document, page: ObjectId, name: &str) -> Vec<u8> {
    let resources = page_resources(doc, page);
    let xobjects = match resources.get(b"XObject").unwrap() {
        Object::Reference(id) => doc.get_dictionary(*id).unwrap().clone(),
        Object::Dictionary(dict) => dict.clone(),
        other => panic!("unexpected XObject entry: {other:?}"),
    };
    let form_id = xobjects.get(name.as_bytes()).unwrap().as_reference().unwrap();
    let stream = doc.get_object(form_id).unwrap().as_stream().unwrap();
    stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone())
}
