//! Prompt text for structuring, diagrams, refinement and chat.

/// Prompt for one schema section.
///
/// # Examples
///
/// ```
/// use procdoc_pipeline::section_prompt;
///
/// let prompt = section_prompt("List the objectives.", "Objectives", "Clerks approve invoices.");
/// assert!(prompt.starts_with("List the objectives."));
/// assert!(prompt.contains("the 'Objectives' section"));
/// assert!(prompt.contains("Clerks approve invoices."));
/// ```
pub fn section_prompt(instruction: &str, section: &str, narrative: &str) -> String {
    format!(
        "{instruction}\n\n\
         Process Description:\n\
         {narrative}\n\n\
         Please provide the content for the '{section}' section based on the process description above.\n\n\
         IMPORTANT FORMATTING INSTRUCTIONS:\n\
         - Use HTML tags for formatting: <p> for paragraphs, <ul> and <li> for bulleted lists, <ol> and <li> for numbered lists\n\
         - Use <strong> for bold text and <em> for italic text\n\
         - DO NOT include markdown formatting (no **, no ##, no - for lists)\n\
         - DO NOT repeat the section name/title in your response - start directly with the content\n\
         - DO NOT include any preamble or introduction - start immediately with the actual content"
    )
}

/// Prompt asking for a Mermaid flowchart of the process steps.
pub fn diagram_prompt(steps: &str) -> String {
    format!(
        "You are an expert in business process modeling. Convert the following process steps into a Mermaid.js flowchart diagram.\n\n\
         Requirements:\n\
         - Use 'graph TD' (top-down) direction\n\
         - Represent each process step as a node, for example A[Step 1]\n\
         - Represent decision points as diamonds, for example B{{Is it valid?}}\n\
         - Connect nodes with --> arrows\n\
         - Keep node labels short, at most 3-4 words per node\n\
         - Use clear node IDs (A, B, C, ...)\n\
         - Label decision branches with -->|Yes| and -->|No|\n\
         - Include a start node and an end node\n\
         - Output ONLY the Mermaid code, with no explanation\n\
         - Do NOT wrap the output in ```mermaid code fences\n\n\
         Process Steps:\n\
         {steps}\n\n\
         Output the Mermaid diagram code only:"
    )
}

/// Prompt revising one section according to user feedback.
pub fn refine_prompt(section: &str, content: &str, feedback: &str) -> String {
    format!(
        "You are an expert UiPath Business Analyst refining a PDD section.\n\n\
         The section name is: '{section}'\n\
         The current content is: '{content}'\n\
         The user has provided the following feedback: '{feedback}'\n\n\
         Rewrite the section content based on the user's feedback.\n\
         - Maintain a professional tone\n\
         - Adhere to UiPath documentation standards\n\
         - Keep the content clear and concise\n\
         - Preserve the structure (bulleted lists, numbered steps, etc.) where appropriate\n\n\
         Output only the revised content, nothing else."
    )
}

/// Prompt answering a documentation question, optionally with process context.
///
/// # Examples
///
/// ```
/// use procdoc_pipeline::chat_prompt;
///
/// let bare = chat_prompt("What goes in Reporting?", None);
/// assert!(!bare.contains("Context about the process"));
///
/// let grounded = chat_prompt("What goes in Reporting?", Some("Invoices are approved daily."));
/// assert!(grounded.contains("Invoices are approved daily."));
/// ```
pub fn chat_prompt(message: &str, context: Option<&str>) -> String {
    let context_block = context
        .map(|context| format!("Context about the process: {context}\n\n"))
        .unwrap_or_default();
    let context_hint = if context.is_some() {
        "If the question is about the process, use the provided context.\n"
    } else {
        ""
    };

    format!(
        "You are an expert UiPath Business Analyst helping a user create a Process Design Document (PDD).\n\n\
         {context_block}\
         User's question: {message}\n\n\
         Provide a helpful, concise response to assist with PDD creation.\n\
         {context_hint}\
         Keep responses focused on UiPath and RPA documentation standards."
    )
}
