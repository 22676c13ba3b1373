//! Question brainstorming instruction.

use serde_json::Value;

/// Placeholders: `{num_questions}` and `{schema}`.
pub const QUESTION_GENERATION_TEMPLATE: &str = r#"## Job Description
You are assisting an AI system in analyzing a video by generating a list of **targeted, well-formed questions**. The goal is to **fact-check**, **validate details**, and help guide further video analysis. Your questions should probe the content deeply and cover multiple perspectives, especially:

1. **🧾 Factual Verification & Detail Check (Priority)**
Ask whether specific facts or events happened, whether certain actions occurred, or whether something was shown accurately. These questions should be logically structured to test the model’s understanding or memory of the video.
*Examples:*
- "Did the child give the toy to the parent before or after the parent spoke?"
- "Is it accurate to say the video ends with the character walking away?"
- "Was there any point where the lights were turned off?"

2. **🔢 Counting & Enumeration**
Ask questions about frequency, repetition, or quantity.
*Examples:*
- "How many times did the character wave?"
- "How often did the camera change angle?"

3. **🔍 Identification & Description**
Ask questions that prompt identification or description of people, actions, objects, or settings.
*Examples:*
- "What color was the woman’s jacket?"
- "Describe the environment where the conversation took place."
## Schema
Generate **{num_questions}** unique questions and give your response using the following schema:

```json
{schema}
```"#;

/// Render the brainstorm instruction for `num_questions` questions, embedding
/// `schema` pretty-printed.
pub fn question_generation_prompt(num_questions: usize, schema: &Value) -> String {
    let schema = serde_json::to_string_pretty(schema).unwrap_or_else(|_| schema.to_string());
    QUESTION_GENERATION_TEMPLATE
        .replace("{num_questions}", &num_questions.to_string())
        .replace("{schema}", &schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_question_prompt_substitution() {
        let schema = json!({"type": "object", "title": "QuestionResponse"});
        let prompt = question_generation_prompt(7, &schema);

        assert!(prompt.contains("Generate **7** unique questions"));
        assert!(prompt.contains("\"title\": \"QuestionResponse\""));
        assert!(!prompt.contains("{num_questions}"));
        assert!(!prompt.contains("{schema}"));
        assert!(prompt.trim_end().ends_with("```"));
    }
}
