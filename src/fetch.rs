use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Outcome of a request that reached the server.
pub enum Fetched {
    Ok(web::Response),
    Status(u16),
}

pub async fn fetch(url: &str) -> anyhow::Result<Fetched> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {} failed: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        return Ok(Fetched::Status(resp.status()));
    }
    Ok(Fetched::Ok(resp))
}

pub async fn response_text(resp: &web::Response) -> anyhow::Result<String> {
    let promise = resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("response body is not text"))
}

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let resp = match fetch(url).await? {
        Fetched::Ok(r) => r,
        Fetched::Status(code) => anyhow::bail!("HTTP error! status: {} ({})", code, url),
    };
    let promise = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let buf = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}
