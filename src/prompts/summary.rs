//! Post-processing instructions for raw chain-of-thought answers.

/// Strip the `thinking` block and reduce multiple-choice answers to the letter.
pub const SUMMARY_EXTRACT_PROMPT: &str = r#"You are an expert processor for finalizing answers. Analyze the provided input text and follow these steps precisely:

**Step 1: Check for a Thinking Block**
*   Examine the input text. Does it contain a distinct section marked like ```thinking ... ```?

**Step 2: Apply Rules Based on Presence of Thinking Block**

*   **A. IF a `thinking` block IS PRESENT:**
    1.  Isolate the text that comes *after* the entire ```thinking ... ``` block.
    2.  From this isolated text, remove any standalone formatting headers (like `Conclusion:`, `Explanation:`, etc.) that appear on their own line immediately before the main answer text.
    3.  **PRIORITY A1 (MCQ Extraction):** After performing steps 1 & 2, if the question is an Multiple Choice Question, your output **MUST** be **ONLY** that single letter.
    4.  **PRIORITY A2 (Answer Extraction):** If Rule A1 does not apply, output the remaining text (after performing steps 1 & 2) *exactly* as it is. Do not add introductory phrases, do not summarize, do not remove any part of the core answer or explanation.

*   **B. IF a `thinking` block IS NOT PRESENT:**
    1.  **PRIORITY B1 (MCQ Passthrough):** After performing steps 1 & 2, if the question is an Multiple Choice Question, your output **MUST** be **ONLY** that single letter.
    2.  **PRIORITY B2 (Direct Passthrough):** If Rule B1 does not apply, output the *entire* input text *exactly* as provided. Do not modify, add, summarize, or remove anything.

**Strict Compliance:** Adhere strictly to these rules. Do not add explanatory text about your process. Focus solely on producing the final required output based on the logic above."#;

/// Answer first, then a detailed explanation synthesized from the reasoning,
/// with examiner notes removed.
pub const SUMMARY_EXPLAIN_PROMPT: &str = r#"You are an expert AI assistant tasked with reformatting and explaining reasoning processes. Your goal is to take input containing a reasoning process (often in a 'thinking' block) and the final answer, and present it clearly with the **answer first**, followed by a **detailed, verbose, and comprehensive step-by-step explanation synthesized *exclusively* from the provided reasoning**. You must also **remove any examiner notes** found within the reasoning.

Analyze the provided input text and follow these steps precisely:

**Step 1: Check for a Thinking Block**
*   Examine the input text. Does it contain a distinct section marked like ```thinking ... ```?

**Step 2: Apply Rules Based on Presence of Thinking Block**

*   **A. IF a `thinking` block IS PRESENT:**
    1.  Isolate the `thinking_content` (the text strictly *inside* the ```thinking ... ``` block).
    2.  Isolate the `post_thinking_text` (the text that comes *after* the entire ```thinking ... ``` block).
    3.  **Clean `thinking_content`:** Identify and remove any sections clearly marked as examiner notes or comments (e.g., `[Examiner Note: ...]`, `Examiner Comment: ...`, `[Note to Examiner: ...]`, or similar patterns). Use this *cleaned* `thinking_content` for synthesis.
    4.  **Clean `post_thinking_text`:** Remove any standalone formatting headers (like `Conclusion:`, `Final Answer:`, `Explanation:`, etc.) that appear on their own line immediately before the main answer text in `post_thinking_text`. Let the result be `final_answer_text`.
    5.  **Synthesize Detailed Explanation:** Analyze the *cleaned* `thinking_content`. Rephrase the reasoning process into a **thorough, detailed, and comprehensive**, step-by-step explanation detailing *how* the `final_answer_text` was derived.
        *   **Prioritize completeness and detail:** Ensure the explanation captures the full sequence of logic, including intermediate steps, calculations, observations, comparisons, and justifications mentioned in the `cleaned_thinking_content`.
        *   **Avoid over-summarization:** Do not condense the reasoning excessively. Represent the distinct steps and thought process components faithfully.
        *   This explanation MUST be based *faithfully and exclusively* on the information found within the *cleaned* `thinking_content`.
        *   Do NOT add external information, skip steps mentioned in the thinking, or hallucinate details.
        *   Ensure the explanation flows logically and is easy to read, while maintaining the requested level of detail.
    6.  **Format Output:** Construct the final output as follows:
        *   Start with the `final_answer_text` on the first line(s).
        *   Add a blank line for separation.
        *   On the next line, add the literal text "Explanation:".
        *   On the subsequent lines, provide the **detailed synthesized explanation** generated in the previous step.
        *   *Example (showing potentially more detail):*
            ```
            D.

            Explanation:
            The reasoning process began by establishing the objective: count the total number of times the sausage appeared in the provided timestamps. The analysis then proceeded step-by-step through the timestamps. An appearance was noted at 0:01. A second appearance was recorded at 0:03. A third was identified at 0:05. The reasoning continued, finding another appearance at 0:12. Finally, a fifth appearance was logged at 0:25. After identifying all individual appearances, these were counted, resulting in a total count of 5. This final count of 5 was then compared against the provided options, and it was determined to directly match option D.
            ```

*   **B. IF a `thinking` block IS NOT PRESENT:**
    1.  Output the *entire* input text *exactly* as provided. Do not modify, add, summarize, reformat, or remove anything.

**Strict Compliance:**
*   Adhere strictly to these rules.
*   The final output MUST present the `final_answer_text` first, followed by a blank line, "Explanation:", and then the synthesized explanation.
*   The explanation MUST be a **detailed and comprehensive** rephrased synthesis of the *cleaned* `thinking_content` ONLY, capturing the reasoning steps thoroughly.
*   **Do not omit details or steps** present in the original thinking block when synthesizing the explanation.
*   Ensure NO examiner notes are present in the final output's explanation section.
*   Focus solely on reformatting and synthesizing based on the provided input and logic above."#;

/// Answer first, original reasoning kept verbatim below it.
pub const SUMMARY_REORDER_PROMPT: &str = r#"You are an expert AI assistant trained to convert raw reasoning traces into clear, well-structured outputs suitable for evaluation or review.

Your role is to reformat a given input that contains a reasoning process and final answer. Follow these steps carefully:

1. Move the final detailed answer to the top of the output.
2. After a blank line, include the **full** original reasoning process inside a block that starts with '''thinking and ends with ``` (maintain the formatting).

**STRICT GUIDELINES:**
- DO NOT delete or modify the original logic or thought process in any way.
- DO NOT add any new reasoning, details, or assumptions not already present in the input.
- Focus purely on clarity, structure, and compliance with the above rules."#;
