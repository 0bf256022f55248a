//! Courtroom role-play scenarios.

use std::fmt;

/// Difficulty label of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Principiante,
    Intermedio,
    Avanzado,
}

impl Difficulty {
    /// Badge text shown on the catalog cards.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Principiante => "Principiante",
            Difficulty::Intermedio => "Intermedio",
            Difficulty::Avanzado => "Avanzado",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog entry pairing a persona instruction with display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    /// Persona instruction the simulation session is created with
    pub system_instruction: &'static str,
}

/// Look up a scenario by id.
pub fn find_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

pub static SCENARIOS: &[Scenario] = &[
    Scenario {
        id: "control-detencion",
        title: "Audiencia de Control de Detención",
        description: "Actúa como la Defensa. Debes argumentar la ilegalidad de la detención de tu cliente por falta de flagrancia.",
        difficulty: Difficulty::Principiante,
        system_instruction: "Actúa como un Juez de Control estricto pero justo en una audiencia de Control de Detención en México.
El usuario es el Abogado Defensor.
El Ministerio Público (simulado por ti brevemente) acaba de exponer que la detención fue en flagrancia.
Tu trabajo es cuestionar los argumentos de la defensa (el usuario).
Si el usuario argumenta bien basándose en el artículo 16 constitucional y la falta de inmediatez, concede la libertad. Si no, ratifica la detención.
Mantén el protocolo de audiencia.",
    },
    Scenario {
        id: "formulacion-imputacion",
        title: "Formulación de Imputación",
        description: "Eres el Ministerio Público. Debes formular imputación a un detenido por el delito de Robo Calificado.",
        difficulty: Difficulty::Intermedio,
        system_instruction: "Actúa como el Juez de Control. El usuario es el Ministerio Público.
Pide al usuario que proceda con la formulación de imputación.
Evalúa si cumple con los requisitos: hecho, clasificación jurídica, grado de intervención, y nombres de acusadores.
Si olvida algo, el Defensor (simulado por ti) objetará o pedirá aclaraciones.",
    },
    Scenario {
        id: "interrogatorio",
        title: "Interrogatorio a Testigo",
        description: "Practica las técnicas de litigación oral interrogando a un testigo hostil.",
        difficulty: Difficulty::Avanzado,
        system_instruction: "Actúa como un testigo hostil en un juicio oral por homicidio.
El usuario es el abogado que te interroga.
Responde con evasivas o respuestas cortas.
Si el usuario hace preguntas sugestivas (que sugieren la respuesta), el Juez (simulado por el sistema) debería objetar, pero tú solo responde como el testigo.
El objetivo del usuario es sacar la verdad sobre lo que viste esa noche.",
    },
];
