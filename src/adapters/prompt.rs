use serde_json::{json, Value};

/// Number of keyword entries requested from the model, seed included.
pub const KEYWORD_COUNT: usize = 15;

/// Builds the French-market SEO prompt for a seed keyword.
pub fn build_prompt(query: &str) -> String {
    format!(
        "Agis comme un expert SEO et un outil de recherche de mots-clés de classe mondiale \
         comme SEMrush ou Ahrefs. Pour le mot-clé \"{query}\", génère une liste de {count} \
         mots-clés associés pertinents pour le marché français. Pour chaque mot-clé (y compris \
         le mot-clé original en première position), fournis une estimation réaliste du \
         \"volume de recherche mensuel\" en France et un score de \"difficulté du mot-clé\" \
         (sur une échelle de 0 à 100, où 0 est très facile et 100 est très difficile). \
         Assure-toi que les données sont crédibles et représentatives des métriques SEO actuelles.",
        query = query,
        count = KEYWORD_COUNT,
    )
}

/// Output shape requested from the model. Compliance is advisory; the payload
/// is still validated on receipt.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "keyword": {
                    "type": "STRING",
                    "description": "Le mot-clé analysé."
                },
                "volume": {
                    "type": "INTEGER",
                    "description": "Le volume de recherche mensuel estimé pour ce mot-clé en France."
                },
                "difficulty": {
                    "type": "INTEGER",
                    "description": "Un score de difficulté du mot-clé de 0 (très facile) à 100 (très difficile)."
                }
            },
            "required": ["keyword", "volume", "difficulty"]
        }
    })
}
