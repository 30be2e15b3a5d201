// src/prompt.rs

/// The instruction sent to the model for one answer. Built only by
/// [`build_prompt`], so equal inputs always give equal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders the grading instruction for a question/answer pair.
/// Both texts are embedded as received.
pub fn build_prompt(question: &str, answer: &str) -> Prompt {
    Prompt(format!(
        r#"Eres un asistente de profesor para alumnos de primaria y secundaria.
Tu tarea es evaluar la siguiente respuesta de un alumno a una pregunta de pensamiento crítico.

Pregunta: "{}"
Respuesta del alumno: "{}"

Quiero que evalúes la respuesta y me devuelvas ÚNICAMENTE un objeto JSON con el siguiente formato:
{{"evaluacion": "Correcto" o "Incorrecto", "feedback": "Una retroalimentación breve y constructiva para el alumno."}}

Criterios de evaluación:
- "Correcto": si la respuesta del alumno aborda la idea principal de la pregunta, aunque no sea perfecta. Sé flexible, son niños.
- "Incorrecto": si la respuesta es claramente irrelevante, no responde a la pregunta o es un texto sin sentido.
- El feedback debe ser positivo y animar al alumno a mejorar, explicando qué estuvo bien o qué podría añadir."#,
        question, answer
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_prompt("¿Qué es un ecosistema?", "Plantas y animales viviendo juntos");
        let b = build_prompt("¿Qué es un ecosistema?", "Plantas y animales viviendo juntos");
        assert_eq!(a, b);
        assert_eq!(a.as_str().as_bytes(), b.as_str().as_bytes());
    }

    #[test]
    fn test_prompt_embeds_inputs_verbatim() {
        let question = "¿Por qué \"flotan\" los barcos?\n{x}";
        let answer = "Por el agua </script> {{y}}";
        let prompt = build_prompt(question, answer);

        assert!(prompt.as_str().contains(&format!("Pregunta: \"{}\"", question)));
        assert!(prompt.as_str().contains(&format!("Respuesta del alumno: \"{}\"", answer)));
    }

    #[test]
    fn test_prompt_states_output_contract_and_policy() {
        let prompt = build_prompt("q", "a").to_string();

        assert!(prompt.contains("asistente de profesor"));
        assert!(prompt.contains(r#"{"evaluacion": "Correcto" o "Incorrecto", "feedback":"#));
        assert!(prompt.contains("aborda la idea principal"));
        assert!(prompt.contains("claramente irrelevante"));
        assert!(prompt.contains("El feedback debe ser positivo"));
    }

    #[test]
    fn test_different_answers_give_different_prompts() {
        assert_ne!(build_prompt("q", "a"), build_prompt("q", "b"));
    }
}
