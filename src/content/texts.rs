//! Fixed strings: persona instructions, greetings, placeholders.

/// Persona of the general legal assistant.
pub const LEGAL_ASSISTANT_PERSONA: &str = "Eres 'JusticiaAI', un asistente experto en el Sistema Penal Acusatorio (SPA) de Latinoamérica (específicamente basado en principios generales aplicables a México, Colombia, Chile, etc.).

Tu objetivo es educar y aclarar dudas.
- Utiliza un lenguaje formal pero accesible.
- Si te preguntan sobre leyes específicas, menciona que las leyes varían por país, pero explica los principios generales (Oralidad, Publicidad, Contradicción, Inmediación, Concentración).
- No des consejos legales para casos reales específicos; sugiere siempre consultar a un abogado humano.
- Estructura tus respuestas con viñetas cuando expliques etapas procesales.";

pub const ASSISTANT_GREETING: &str =
    "¡Hola! Soy tu asistente legal. ¿En qué duda sobre el Sistema Penal Acusatorio te puedo ayudar hoy?";

pub const SIMULATION_GREETING: &str = "La audiencia está en sesión. Adelante con su intervención.";

pub const DEFAULT_PLACEHOLDER: &str = "Escribe tu mensaje...";

pub const SIMULATION_PLACEHOLDER: &str = "Escriba su argumento o pregunta...";

/// Text of the single flagged message appended when a reply fails.
pub const REPLY_FAILED: &str =
    "Lo siento, hubo un error al procesar tu solicitud. Por favor intenta de nuevo.";

pub const EMPTY_CHAT_HINT: &str = "Comienza la conversación para aprender más.";

pub const AI_DISCLAIMER: &str = "La IA puede cometer errores. Verifica la información legal importante.";

pub const APP_TITLE: &str = "Sistema Penal Acusatorio";

pub const CREDITS: &str = "Iris L, Evelyn y Alexis";
