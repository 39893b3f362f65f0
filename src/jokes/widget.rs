//! Joke Widget Template
//!
//! The widget is a static HTML document hosted by the MCP client. After a
//! paired tool call completes, the host exposes the tool's structured output
//! on `window.openai.toolOutput`; the widget script copies `toolOutput.joke`
//! into its placeholder. The widget never re-invokes a tool itself.

/// Rendering behaviour of the widget document.
///
/// The two knobs cover the variants seen in the wild: some hosts emit a
/// globals event when tool output becomes available, others populate
/// `toolOutput` before the document runs its scripts.
pub struct WidgetConfig {
    /// Re-render when the host signals updated globals, in addition to the
    /// immediate render on load.
    pub listen_for_globals: bool,

    /// Text shown while no tool output is available.
    pub fallback_text: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            listen_for_globals: true,
            fallback_text: "Wait for it...".to_string(),
        }
    }
}

/// Renders the widget HTML document for the given configuration.
///
/// The markup is static: the joke text is bound client-side from the host's
/// `toolOutput` object, and the fallback text is shown whenever the expected
/// field is absent.
pub fn widget_html(config: &WidgetConfig) -> String {
    let subscribe = if config.listen_for_globals {
        "\n  window.addEventListener('openai:set_globals', render);"
    } else {
        ""
    };

    format!(
        r#"<style>
  #dad-joke {{ height: 300px; }}
  p {{ color: green; font-size: 48px }}
</style>
<div id="dad-joke">
  <p>Dad joke will appear here</p>
</div>
<script>
  function render() {{
    const container = document.querySelector('#dad-joke p');
    const output = window.openai && window.openai.toolOutput;
    if (output && output.joke) {{
      container.textContent = output.joke;
    }} else {{
      container.textContent = "{fallback}";
    }}
  }}{subscribe}
  render();
</script>
"#,
        fallback = config.fallback_text,
        subscribe = subscribe,
    )
}
