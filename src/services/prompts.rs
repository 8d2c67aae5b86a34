//! Prompt templates for every AI request shape.
//!
//! Two structured contracts (mission generation, command validation) demand
//! a single JSON object in the response; the three free-text requests
//! (hint, answer, explanation) have no output contract.

use crate::domain::models::{Difficulty, Mission};

/// Generation prompt: produce one mission as strict JSON.
pub fn mission_prompt(topic: &str, difficulty: Difficulty) -> String {
    format!(
        r#"You are an expert Nmap training scenario generator. Generate a realistic penetration testing scenario.

REQUIREMENTS:
- Topic: {topic}
- Difficulty: {difficulty}
- The scenario MUST require the user to use at least 2 nmap flags (3+ for Hard/Expert)
- Target IPs must be in private ranges (10.x.x.x, 192.168.x.x, 172.16.x.x for IPv4)
- For IPv6 topics, use documentation/link-local ranges (fe80::, 2001:db8::)
- For advanced topics (Level 4+), provide real-world context like 'bypass firewall', 'enumerate SMB shares', 'find CVE-vulnerable services'
- Create an engaging story/context for the scenario

OUTPUT STRICT JSON FORMAT ONLY (no markdown, no code blocks):
{{"title": "Operation Name", "description": "Detailed scenario description requiring specific nmap techniques", "target_ip": "IP address", "difficulty": "{difficulty}", "topic_category": "{topic}"}}
"#
    )
}

/// Validation prompt: judge one command against the active mission.
pub fn validation_prompt(mission: &Mission, command: &str) -> String {
    format!(
        r#"You are a strict Nmap Exam Proctor. Analyze the user's command against the current scenario.

CURRENT MISSION:
- Title: {title}
- Description: {description}
- Target IP: {target_ip}
- Difficulty: {difficulty}
- Topic: {topic}

USER'S COMMAND: {command}

VALIDATION RULES:
- Be strict but educational
- If the command is 90% correct but missing a minor optimization, mark it correct but mention the improvement
- If the user uses deprecated flags (e.g., -P0 instead of -Pn), mark incorrect and explain the modern alternative
- For IPv6 scans, verify the user included the -6 flag
- For NSE script arguments, check proper --script-args syntax
- The simulated_output MUST look like real nmap output with proper formatting (Starting Nmap... Host is up... PORT STATE SERVICE...)
- Include NSE script output when applicable (3-5 lines minimum)

OUTPUT STRICT JSON FORMAT ONLY (no markdown, no code blocks):
{{"correct": true/false, "feedback": "Short explanation of the result", "simulated_output": "Realistic multi-line nmap terminal output"}}
"#,
        title = mission.title,
        description = mission.description,
        target_ip = mission.target_ip,
        difficulty = mission.difficulty,
        topic = mission.topic_category,
    )
}

/// Hint prompt: one nudge, without revealing the full command.
pub fn hint_prompt(mission: &Mission) -> String {
    format!(
        r#"Provide a helpful hint for this nmap scenario without giving the full answer:

Mission: {title}
Description: {description}
Target: {target_ip}
Topic: {topic}

Give ONE specific hint about which nmap flag or technique to use. Be helpful but don't reveal the full command."#,
        title = mission.title,
        description = mission.description,
        target_ip = mission.target_ip,
        topic = mission.topic_category,
    )
}

/// Full-answer prompt: the complete command with per-flag rationale.
pub fn answer_prompt(mission: &Mission) -> String {
    format!(
        r#"Provide the correct nmap command for this scenario:

Mission: {title}
Description: {description}
Target: {target_ip}
Topic: {topic}

Give the complete nmap command and briefly explain why each flag is used."#,
        title = mission.title,
        description = mission.description,
        target_ip = mission.target_ip,
        topic = mission.topic_category,
    )
}

/// Explanation prompt: why the last attempt was wrong.
pub fn explanation_prompt(mission: &Mission) -> String {
    format!(
        r#"Explain why the user's last command was incorrect for this scenario:

Mission: {title}
Description: {description}
Target: {target_ip}
Topic: {topic}

Explain what was wrong and what the correct approach should be. Be educational and helpful."#,
        title = mission.title,
        description = mission.description,
        target_ip = mission.target_ip,
        topic = mission.topic_category,
    )
}
