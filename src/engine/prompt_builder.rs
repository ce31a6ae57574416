use crate::engine::llm_client::{GenerationRequest, SamplingOptions};
use crate::model::game_state::GameState;
use crate::model::vocabulary::Vocabulary;

/// How many past narrations are quoted back to the model.
const RECENT_SCENES: usize = 2;

/// Builds the request sent to the narrator model.
/// Only formats text; no networking, no state changes.
pub struct PromptBuilder<'a> {
    vocabulary: &'a Vocabulary,
    model: &'a str,
    options: &'a SamplingOptions,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(vocabulary: &'a Vocabulary, model: &'a str, options: &'a SamplingOptions) -> Self {
        Self {
            vocabulary,
            model,
            options,
        }
    }

    pub fn build(&self, action: &str, state: &GameState) -> GenerationRequest {
        GenerationRequest {
            model: self.model.to_string(),
            system: self.system_prompt(action, state),
            prompt: action.to_string(),
            options: self.options.clone(),
        }
    }

    pub fn system_prompt(&self, action: &str, state: &GameState) -> String {
        let mut prompt = String::new();

        prompt.push_str(
            "Você é um mestre de RPG experiente, narrando aventuras em português brasileiro.\n",
        );
        prompt.push_str(&format!(
            "Continue a história com base na ação do jogador: '{}'.\n\n",
            action
        ));

        push_context(&mut prompt, state);
        push_structure(&mut prompt);
        push_status_format(&mut prompt, self.vocabulary);

        prompt.push_str("O jogador só pode usar itens que estão no inventário.\n");
        prompt.push_str(
            "Mantenha o clima de fantasia medieval e seja consistente com o mundo apresentado.\n",
        );

        prompt
    }
}

fn push_context(prompt: &mut String, state: &GameState) {
    prompt.push_str("Contexto atual:\n");
    prompt.push_str(&format!("- Pontos de Vida (HP): {}\n", state.hp));
    prompt.push_str(&format!("- Inventário: {}\n", format_list(&state.inventory, "vazio")));
    prompt.push_str(&format!(
        "- Últimas cenas: {}\n",
        format_list(state.recent_history(RECENT_SCENES), "Nenhuma")
    ));
    prompt.push_str(&format!("- Cena atual: {}\n\n", state.current_scene));
}

fn push_structure(prompt: &mut String) {
    prompt.push_str(
        "Gere de 1 a 2 parágrafos narrativos mantendo o clima de aventura, fantasia e coerência \
com o cenário. Ao final dos parágrafos acabe em uma escolha para o jogador, com opções \
numeradas (1., 2., 3.), fazendo-o tomar uma ação.\n\n",
    );
}

fn push_status_format(prompt: &mut String, vocab: &Vocabulary) {
    let units = &vocab.hp_units;
    let quoted = |sign: &str| {
        units
            .iter()
            .map(|u| format!("\"{sign}X {u}\""))
            .collect::<Vec<_>>()
            .join(" ou ")
    };

    prompt.push_str("**IMPORTANTE:**\n");
    prompt.push_str("- Sempre interaja com o HP e o inventário quando houver eventos relevantes\n");
    prompt.push_str("- Alterações no HP ou inventário devem estar fundamentadas em eventos da história\n");
    prompt.push_str("- Após as opções, informe mudanças usando exatamente este formato:\n");
    prompt.push_str(&format!("  Dano: {}\n", quoted("-")));
    prompt.push_str(&format!("  Cura: {}\n", quoted("+")));
    prompt.push_str(&format!(
        "  Itens ganhos: \"{} [item]\"\n",
        vocab.gain_verbs.join("/")
    ));
    prompt.push_str(&format!(
        "  Itens perdidos: \"{} [item]\"\n\n",
        vocab.loss_verbs.join("/")
    ));
}

fn format_list(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::llm_client::DEFAULT_MODEL;

    #[test]
    fn prompt_carries_state_and_action() {
        let vocab = Vocabulary::default();
        let options = SamplingOptions::default();
        let builder = PromptBuilder::new(&vocab, DEFAULT_MODEL, &options);
        let mut state = GameState::initial();
        state.hp = 72;

        let request = builder.build("abrir o baú", &state);

        assert_eq!(request.model, DEFAULT_MODEL);
        assert_eq!(request.prompt, "abrir o baú");
        assert!(request.system.contains("'abrir o baú'"));
        assert!(request.system.contains("Pontos de Vida (HP): 72"));
        assert!(request.system.contains("Inventário: espada, poção de cura"));
        assert!(request.system.contains("Últimas cenas: Nenhuma"));
        assert!(request.system.contains(&state.current_scene));
    }

    #[test]
    fn prompt_quotes_only_the_last_two_scenes() {
        let vocab = Vocabulary::default();
        let options = SamplingOptions::default();
        let builder = PromptBuilder::new(&vocab, DEFAULT_MODEL, &options);
        let mut state = GameState::initial();
        state.push_scene("cena um");
        state.push_scene("cena dois");
        state.push_scene("cena três");

        let system = builder.system_prompt("olhar", &state);

        assert!(system.contains("Últimas cenas: cena dois, cena três"));
        assert!(!system.contains("cena um"));
    }

    #[test]
    fn prompt_lists_the_recognized_vocabulary() {
        let vocab = Vocabulary::default();
        let options = SamplingOptions::default();
        let builder = PromptBuilder::new(&vocab, DEFAULT_MODEL, &options);

        let system = builder.system_prompt("olhar", &GameState::initial());

        assert!(system.contains("\"-X pontos de vida\" ou \"-X hp\""));
        assert!(system.contains("\"+X pontos de vida\" ou \"+X hp\""));
        assert!(system.contains("pegou/obteve/encontrou/recebeu/ganhou [item]"));
        assert!(system.contains("perdeu/usou/consumiu/gastou [item]"));
    }
}
