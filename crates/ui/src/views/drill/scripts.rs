/// Plays `url` and returns `""` once playback starts, or the rejection reason.
pub(super) fn play_sound_script(url: &str) -> String {
    format!(
        r#"const cache = window.__numberKeysSounds || (window.__numberKeysSounds = {{}});
    const url = {url:?};
    let audio = cache[url];
    if (!audio) {{
        audio = new Audio(url);
        cache[url] = audio;
    }}
    audio.currentTime = 0;
    try {{
        await audio.play();
        return "";
    }} catch (e) {{
        return String(e || "playback rejected");
    }}"#,
    )
}

pub(super) fn focus_script(id: &str) -> String {
    format!("document.getElementById({id:?})?.focus();")
}
