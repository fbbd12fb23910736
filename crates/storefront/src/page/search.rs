//! Simulated product search box.

/// The header search input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    input: String,
}

impl SearchBox {
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit the current input.
    ///
    /// Blank input is ignored and left in place. Otherwise the input is
    /// cleared and the message announcing the simulated search is returned.
    pub fn submit(&mut self) -> Option<String> {
        let term = self.input.trim();
        if term.is_empty() {
            return None;
        }

        let message = results_message(term);
        self.input.clear();
        Some(message)
    }
}

/// Text shown in place of real search results.
#[must_use]
pub fn results_message(term: &str) -> String {
    format!(
        "Buscando por: \"{term}\"\n\nEm um site real, isso redirecionaria para os resultados da busca."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_trims_and_clears() {
        let mut search = SearchBox::default();
        search.set_input("  amortecedor  ");

        let message = search.submit();
        assert_eq!(
            message.as_deref(),
            Some(
                "Buscando por: \"amortecedor\"\n\nEm um site real, isso redirecionaria para os resultados da busca."
            )
        );
        assert_eq!(search.input(), "");
    }

    #[test]
    fn test_blank_submit_ignored() {
        let mut search = SearchBox::default();
        search.set_input("   ");
        assert_eq!(search.submit(), None);
        assert_eq!(search.input(), "   ");
    }
}
