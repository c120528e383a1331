//! Prompt templates for the video path.

use procdoc_core::Frame;

/// Marker placed in the fusion prompt when no frame description survived.
pub const VISUAL_ANALYSIS_UNAVAILABLE: &str =
    "Visual analysis unavailable: no frame descriptions could be produced. Rely on the audio transcript alone.";

/// Prompt sent with one sampled frame.
///
/// The transcript is included so the model can tie what is visible to what
/// the narrator is saying at that point.
pub fn frame_description_prompt(transcript: &str, index: usize, offset_secs: f64) -> String {
    format!(
        r#"You are an expert UiPath Business Analyst analysing a screen recording of a business process.

This is frame {index}, captured about {offset_secs:.0} seconds into the recording.

Audio transcript of the whole recording, for context:
{transcript}

Describe what this frame shows:
- The application and screen that are open
- Visible UI elements (menus, buttons, fields, tables) and any text or values in them
- The action the user appears to be performing or about to perform

Output only the description, nothing else."#
    )
}

/// Prompt for the single call that fuses transcript and frame descriptions.
///
/// Frames must already be in sampling order.
pub fn fusion_prompt(transcript: &str, frames: &[Frame]) -> String {
    let visual = if frames.is_empty() {
        VISUAL_ANALYSIS_UNAVAILABLE.to_string()
    } else {
        frames
            .iter()
            .map(|frame| format!("Frame {}: {}", frame.index(), frame.description()))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"You are an expert UiPath Business Analyst. Your task is to create a detailed, step-by-step text guide from a screen recording.

You have the audio transcript from the video:
{transcript}

Frame descriptions, in the order they were captured:
{visual}

Combine both sources into one comprehensive, numbered list of steps that describes the process in chronological order.
- Focus on specific actions, inputs, and decisions
- Include any specific field names, button names, or navigation steps
- When the sources disagree about a UI action, trust the frame descriptions
- When the sources disagree about a business rule or condition, trust the audio transcript
- Add details about business rules or conditions mentioned

Output ONLY the step-by-step guide, nothing else."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fusion_prompt_lists_frames_in_given_order() {
        let frames = vec![Frame::new(1, "Login page"), Frame::new(4, "Invoice grid")];
        let prompt = fusion_prompt("narration", &frames);

        let first = prompt.find("Frame 1: Login page").unwrap();
        let second = prompt.find("Frame 4: Invoice grid").unwrap();
        assert!(first < second);
        assert!(!prompt.contains(VISUAL_ANALYSIS_UNAVAILABLE));
    }

    #[test]
    fn test_fusion_prompt_marks_missing_visuals() {
        let prompt = fusion_prompt("narration", &[]);
        assert!(prompt.contains(VISUAL_ANALYSIS_UNAVAILABLE));
        assert!(prompt.contains("narration"));
    }
}
