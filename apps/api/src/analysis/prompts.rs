// All LLM prompt constants for the analysis module.
// Every service that talks to the LLM keeps its prompts in a prompts.rs
// alongside its handlers.

/// System instruction sent with every analysis call. Fixes the analyst
/// persona and the three-part output contract the extractor relies on.
pub const ANALYST_SYSTEM: &str = "You are an expert art career analyst specializing in evaluating artists' professional achievements. Your task is to analyze the provided artist's resume and calculate an accurate CLI (Career Level Index) value between 1.00 and 5.00 based on the specified calculation framework. Provide the CLI value, a brief explanation, and a detailed category breakdown.";

/// Default rubric served by GET /PromptCalcCLI.txt when no custom document
/// exists at the configured path. Callers use it as their `prompt` field.
/// Configuration artifact reproduced verbatim; not interpreted by this code.
pub const DEFAULT_CLI_PROMPT: &str = r#"Career Level Index (CLI) Calculation Framework
Purpose
The Career Level Index (CLI) is a scoring system that evaluates the career achievements of artists. It measures an artist's professional development and standing within the art world using seven key categories, resulting in a normalized score ranging from 1.00 to 5.00. A score of 1.00 indicates no measurable achievements, while a 5.00 reflects the maximum possible accomplishments.
________________________________________
How CLI is Calculated
1.	Categories and Weights The CLI evaluates achievements across the following seven categories, each weighted by its importance to an artist's career:
o	Education: 10%
o	Exhibitions: 25%
o	Awards & Competitions: 15%
o	Commissions: 10%
o	Collections: 15%
o	Publications: 15%
o	Institutional Interest: 10%
2.	Scoring System Each category is assigned a score using a three-tiered system:
o	High-Profile Achievement: 1.0 (e.g., solo exhibitions, national awards, museum collections, features in renowned publications).
o	Low-Profile Achievement: 0.6 (e.g., group exhibitions, local awards, private collections, features in lesser-known publications).
o	No Mention: 0.0 (e.g., the category is not addressed in the biography).
3.	Weighted Contributions
o	The score for each category is multiplied by its respective weight to calculate its contribution to the overall CLI.
o	Example: If an artist has a high-profile solo exhibition, the contribution from this category is: 1.0×0.25=0.25
4.	Normalization
o	The raw score (sum of all weighted contributions) is converted into the CLI score using the formula: CLI=(RawScore×4.0)+1.00
o	This ensures that scores range between 1.00 and 5.00.
________________________________________
Rules and Safeguards
1.	Structured Breakdown Each category is scored with the following structure:
o	What was provided: Description of achievements (e.g., "Exhibited in Paris and London").
o	Why the score was assigned: Explanation of the assigned score (e.g., "High-profile exhibitions = 1.0").
o	Final score contribution: Weighted contribution to the overall CLI (e.g., 1.0×0.25=0.25).
2.	Extrapolation
o	When details are unclear, reasonable assumptions are allowed: 
	Sales are treated as private collections unless explicitly stated otherwise.
	Ambiguous mentions like "featured work" are credited as publications.
3.	Validation Checks
o	Prevent over-crediting by ensuring: 
	If exhibitions are scored as high-profile (1.0), no additional weight is applied.
	Publication scores are capped at 1.0 per artist, even if multiple high-profile mentions exist.

Output Format:
1. Calculate the Career Level Index (CLI) value based on the artist's resume.
2. Return the following in your response:
   - The CLI value: "Career Level Index (CLI) = n.nn" with n.nn being the value rounded to two decimal places
   - Two or three sentences that explain the artist's career level based on the CLI value
   - A breakdown of each category showing the score and contribution to the CLI

DO NOT include any additional analysis or commentary beyond what is requested."#;
