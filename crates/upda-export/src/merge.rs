use std::fs;
use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

use crate::error::ExportError;
use crate::layout;

/// XObject resource name the score page is registered under.
const OVERLAY_NAME: &str = "UpdaScore";

/// Overlay the score page onto the template's first page and write the
/// single-page result to `output`.
///
/// The result is written to a sibling temp file and renamed into place, so
/// `output` is either the complete report or untouched.
pub fn merge_report(template: &Path, score: &Path, output: &Path) -> Result<(), ExportError> {
    if !template.is_file() {
        return Err(ExportError::TemplateNotFound {
            path: template.to_path_buf(),
        });
    }
    if !score.is_file() {
        return Err(ExportError::ScoreNotFound {
            path: score.to_path_buf(),
        });
    }

    let template_doc = Document::load(template)?;
    let score_doc = Document::load(score)?;

    let mut merged = overlay(template_doc, score_doc, template, score)?;

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let tmp = output.with_extension("pdf.tmp");
    if let Err(e) = merged.save(&tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, output) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    tracing::info!(path = %output.display(), "merged report written");
    Ok(())
}

/// Draw the first page of `score` over the first page of `template`.
///
/// Layering, not concatenation: the returned document has exactly one page.
/// The paths are only used for error messages.
pub fn overlay(
    mut template: Document,
    mut score: Document,
    template_path: &Path,
    score_path: &Path,
) -> Result<Document, ExportError> {
    let page_count = template.get_pages().len() as u32;
    if page_count == 0 {
        return Err(ExportError::NoPages {
            path: template_path.to_path_buf(),
        });
    }
    if page_count > 1 {
        let extra: Vec<u32> = (2..=page_count).collect();
        tracing::debug!(dropped = extra.len(), "template has extra pages; keeping the first");
        template.delete_pages(&extra);
    }
    let template_page = first_page(&template, template_path)?;

    // Move the score objects above the template's id range before importing.
    score.renumber_objects_with(template.max_id + 1);
    let score_page = first_page(&score, score_path)?;

    let content = score.get_page_content(score_page)?;
    let page = score.get_dictionary(score_page)?;
    let bbox = match page.get(b"MediaBox") {
        Ok(media_box) => media_box.clone(),
        Err(_) => Object::Array(vec![
            0.into(),
            0.into(),
            layout::PAGE_WIDTH.into(),
            layout::PAGE_HEIGHT.into(),
        ]),
    };
    let resources = match page.get(b"Resources") {
        Ok(resources) => resources.clone(),
        Err(_) => Object::Dictionary(Dictionary::new()),
    };

    template.max_id = template.max_id.max(score.max_id);
    template.objects.extend(score.objects);

    let form = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "BBox" => bbox,
            "Resources" => resources,
        },
        content,
    );
    let form_id = template.add_object(form);

    let name = register_xobject(&mut template, template_page, form_id)?;
    wrap_contents(&mut template, template_page, &name)?;

    // Drops the score document's own catalog and page tree.
    template.prune_objects();
    template.renumber_objects();
    template.compress();

    tracing::debug!(form = ?form_id, name = %name, "score page overlaid on template");
    Ok(template)
}

fn first_page(doc: &Document, path: &Path) -> Result<ObjectId, ExportError> {
    doc.get_pages()
        .values()
        .next()
        .copied()
        .ok_or_else(|| ExportError::NoPages {
            path: path.to_path_buf(),
        })
}

/// Follow a single indirect reference, if any.
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Result<&'a Object, ExportError> {
    match obj {
        Object::Reference(id) => Ok(doc.get_object(*id)?),
        other => Ok(other),
    }
}

/// The page's effective resource dictionary, looking up the page tree when
/// the page inherits it.
fn effective_resources(doc: &Document, page_id: ObjectId) -> Result<Dictionary, ExportError> {
    let mut node = doc.get_dictionary(page_id)?;
    loop {
        if let Ok(resources) = node.get(b"Resources") {
            return Ok(resolve(doc, resources)?.as_dict()?.clone());
        }
        match node.get(b"Parent") {
            Ok(parent) => node = resolve(doc, parent)?.as_dict()?,
            Err(_) => return Ok(Dictionary::new()),
        }
    }
}

/// Add the form to the page's XObject resources under a name the page does
/// not already use. Resources are written back inline on the page.
fn register_xobject(
    doc: &mut Document,
    page_id: ObjectId,
    form_id: ObjectId,
) -> Result<String, ExportError> {
    let mut resources = effective_resources(doc, page_id)?;

    let mut xobjects = match resources.get(b"XObject") {
        Ok(existing) => resolve(doc, existing)?.as_dict()?.clone(),
        Err(_) => Dictionary::new(),
    };

    let mut name = OVERLAY_NAME.to_string();
    let mut suffix = 1;
    while xobjects.has(name.as_bytes()) {
        name = format!("{OVERLAY_NAME}{suffix}");
        suffix += 1;
    }

    xobjects.set(name.as_bytes(), form_id);
    resources.set("XObject", xobjects);

    doc.get_object_mut(page_id)?
        .as_dict_mut()?
        .set("Resources", resources);
    Ok(name)
}

/// Isolate the template's drawing in `q … Q`, then paint the form on top.
fn wrap_contents(doc: &mut Document, page_id: ObjectId, name: &str) -> Result<(), ExportError> {
    let existing: Vec<Object> = match doc.get_dictionary(page_id)?.get(b"Contents") {
        Ok(Object::Array(items)) => items.clone(),
        Ok(Object::Reference(id)) => match doc.get_object(*id)? {
            Object::Array(items) => items.clone(),
            _ => vec![Object::Reference(*id)],
        },
        Ok(_) | Err(_) => Vec::new(),
    };

    let open_id = doc.add_object(Stream::new(dictionary! {}, b"q\n".to_vec()));
    let close_id = doc.add_object(Stream::new(
        dictionary! {},
        format!("Q\nq\n/{name} Do\nQ\n").into_bytes(),
    ));

    let mut contents = Vec::with_capacity(existing.len() + 2);
    contents.push(open_id.into());
    contents.extend(existing);
    contents.push(close_id.into());

    doc.get_object_mut(page_id)?
        .as_dict_mut()?
        .set("Contents", contents);
    Ok(())
}
