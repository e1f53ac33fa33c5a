use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Hands `bytes` to the browser as a file download named `filename`.
pub fn save_file(bytes: &[u8], filename: &str, mimeType: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mimeType);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{e:?}"))?;
    let href = Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

    let link = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "not an anchor element")?;
    link.set_href(&href);
    link.set_download(filename);

    let body = document.body().ok_or("no body")?;
    body.append_child(&link).map_err(|e| format!("{e:?}"))?;
    link.click();
    body.remove_child(&link).map_err(|e| format!("{e:?}"))?;
    Url::revoke_object_url(&href).map_err(|e| format!("{e:?}"))?;
    Ok(())
}
