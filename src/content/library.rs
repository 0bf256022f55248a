//! The study library: a two-level tree of categories and topics.

/// A labeled group of bullet points inside a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtopic {
    pub title: &'static str,
    pub details: &'static [&'static str],
}

/// A single readable entry of the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub id: &'static str,
    pub title: &'static str,
    /// Prose body. May be empty when the topic is made only of subtopics.
    pub content: &'static str,
    pub subtopics: &'static [Subtopic],
}

/// A top-level section of the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    /// Glyph shown next to the title in the sidebar
    pub icon: &'static str,
    pub topics: &'static [Topic],
}

impl Category {
    /// First topic of the category. Every category in [`LIBRARY`] has at least one.
    pub fn first_topic(&self) -> &'static Topic {
        &self.topics[0]
    }

    /// Look up a topic by id within this category.
    pub fn topic(&self, id: &str) -> Option<&'static Topic> {
        self.topics.iter().find(|t| t.id == id)
    }
}

/// Look up a category by id.
pub fn find_category(id: &str) -> Option<&'static Category> {
    LIBRARY.iter().find(|c| c.id == id)
}

pub static LIBRARY: &[Category] = &[
    Category {
        id: "sistema-general",
        title: "1. Sistema Penal Acusatorio",
        icon: "⚖",
        topics: &[
            Topic {
                id: "que-es",
                title: "¿Qué es el Sistema Penal Acusatorio?",
                content: "Es un sistema jurídico penal en el que las partes (Fiscalía y Defensa) se enfrentan en igualdad de oportunidades ante un juez imparcial, quien, con base en las pruebas y argumentos, decide si condena o absuelve. Se caracteriza por la separación de funciones: uno investiga y acusa, otro defiende y un tercero juzga.",
                subtopics: &[],
            },
            Topic {
                id: "principios",
                title: "Principios Rectores",
                content: "",
                subtopics: &[
                    Subtopic {
                        title: "Oralidad",
                        details: &[
                            "Las audiencias se desarrollan de viva voz.",
                            "El juez solo valora lo que escucha y ve en la audiencia.",
                        ],
                    },
                    Subtopic {
                        title: "Publicidad",
                        details: &[
                            "Cualquier persona puede entrar a las audiencias (salvo excepciones legales).",
                            "Fomenta la transparencia judicial.",
                        ],
                    },
                    Subtopic {
                        title: "Contradicción",
                        details: &[
                            "Las partes pueden controvertir las pruebas y argumentos de la contraparte.",
                            "Derecho a interrogar y contrainterrogar.",
                        ],
                    },
                    Subtopic {
                        title: "Inmediación",
                        details: &[
                            "El juez debe estar presente físicamente en todas las audiencias.",
                            "El juez debe percibir directamente las pruebas (testigos, peritos).",
                        ],
                    },
                    Subtopic {
                        title: "Concentración",
                        details: &["Las audiencias deben desarrollarse preferentemente en un mismo día o días consecutivos hasta su conclusión."],
                    },
                    Subtopic {
                        title: "Continuidad",
                        details: &["Las audiencias no deben interrumpirse, asegurando una justicia pronta."],
                    },
                    Subtopic {
                        title: "Presunción de Inocencia",
                        details: &["Toda persona es inocente hasta que se demuestre lo contrario mediante sentencia firme."],
                    },
                ],
            },
            Topic {
                id: "diferencia",
                title: "Proceso vs. Procedimiento vs. Juicio",
                content: "Es común confundirlos, pero tienen alcances distintos:\n\n* **Procedimiento:** Inicia con la denuncia/querella y termina con la sentencia firme.\n* **Proceso:** Inicia con la audiencia inicial (judicialización) y termina con la sentencia.\n* **Juicio:** Es solo la etapa final (Etapa de Juicio Oral) donde se decide la culpabilidad.",
                subtopics: &[],
            },
            Topic {
                id: "objetivos",
                title: "Objetivos del Sistema (Art. 20 Const.)",
                content: "1. El esclarecimiento de los hechos.\n2. Proteger al inocente.\n3. Procurar que el culpable no quede impune.\n4. Que se repare el daño.",
                subtopics: &[],
            },
        ],
    },
    Category {
        id: "etapas",
        title: "2. Etapas del Proceso Penal",
        icon: "§",
        topics: &[
            Topic {
                id: "investigacion",
                title: "A. Etapa de Investigación",
                content: "Se divide en dos fases:\n\n1. **Investigación Inicial:** Comienza con la denuncia o querella y concluye cuando el imputado queda a disposición del Juez de Control. Aquí el MP reúne indicios.\n2. **Investigación Complementaria:** Comienza tras la formulación de imputación y concluye con el cierre de la investigación declarado por el Juez.",
                subtopics: &[
                    Subtopic {
                        title: "Flagrancia",
                        details: &["Detención en el momento de cometer el delito o inmediatamente después con persecución ininterrumpida."],
                    },
                    Subtopic {
                        title: "Caso Urgente",
                        details: &["Ordenada por MP cuando hay riesgo de fuga y es delito grave, y no se puede acudir ante Juez."],
                    },
                ],
            },
            Topic {
                id: "audiencia-inicial",
                title: "B. Audiencia Inicial",
                content: "Es la primera comparecencia ante el Juez. Sus pasos fundamentales son:",
                subtopics: &[
                    Subtopic {
                        title: "1. Control de Detención",
                        details: &["Se verifica si la detención fue legal (apegada a DDHH y Constitución)."],
                    },
                    Subtopic {
                        title: "2. Formulación de Imputación",
                        details: &["El MP comunica al investigado que lo investiga por un hecho delictivo."],
                    },
                    Subtopic {
                        title: "3. Declaración del Imputado",
                        details: &["Oportunidad para contestar el cargo (derecho a guardar silencio)."],
                    },
                    Subtopic {
                        title: "4. Vinculación a Proceso",
                        details: &["El Juez decide si hay datos suficientes para iniciar un proceso formal."],
                    },
                    Subtopic {
                        title: "5. Medidas Cautelares",
                        details: &["Para asegurar la presencia del imputado (ej. prisión preventiva, firma periódica)."],
                    },
                    Subtopic {
                        title: "6. Plazo de Cierre",
                        details: &["Se fija tiempo para que MP y Defensa terminen su investigación."],
                    },
                ],
            },
            Topic {
                id: "intermedia",
                title: "C. Etapa Intermedia",
                content: "Su objeto es el ofrecimiento y admisión de los medios de prueba, así como la depuración de los hechos controvertidos.",
                subtopics: &[
                    Subtopic {
                        title: "Escrito de Acusación",
                        details: &["El MP presenta formalmente la acusación."],
                    },
                    Subtopic {
                        title: "Descubrimiento Probatorio",
                        details: &["Las partes deben entregarse copia de todos sus registros de investigación."],
                    },
                    Subtopic {
                        title: "Acuerdos Probatorios",
                        details: &["Pactos para dar por probados hechos notorios y no discutirlos en juicio."],
                    },
                    Subtopic {
                        title: "Auto de Apertura",
                        details: &["Resolución del Juez que indica qué pruebas pasan a Juicio Oral."],
                    },
                ],
            },
            Topic {
                id: "juicio-oral",
                title: "D. Juicio Oral",
                content: "Es la etapa de decisión de las cuestiones esenciales del proceso. Se realiza ante el Tribunal de Enjuiciamiento.",
                subtopics: &[
                    Subtopic {
                        title: "Alegatos de Apertura",
                        details: &["Presentación de la teoría del caso de cada parte."],
                    },
                    Subtopic {
                        title: "Desahogo de Pruebas",
                        details: &["Interrogatorio y contrainterrogatorio de testigos y peritos."],
                    },
                    Subtopic {
                        title: "Alegatos de Clausura",
                        details: &["Conclusiones finales argumentativas."],
                    },
                    Subtopic {
                        title: "Deliberación y Fallo",
                        details: &["Absolutorio o Condenatorio."],
                    },
                    Subtopic {
                        title: "Individualización de Sanción",
                        details: &["Audiencia para fijar los años de pena y reparación del daño."],
                    },
                ],
            },
        ],
    },
    Category {
        id: "sujetos-recursos",
        title: "3. Sujetos, Autoridades y Recursos",
        icon: "◆",
        topics: &[
            Topic {
                id: "sujetos",
                title: "Sujetos Procesales",
                content: "",
                subtopics: &[
                    Subtopic {
                        title: "Ministerio Público",
                        details: &["Conduce la investigación, coordina a las policías y ejerce la acción penal."],
                    },
                    Subtopic {
                        title: "Víctima u Ofendido",
                        details: &["Tiene derecho a la verdad, justicia y reparación del daño. Cuenta con Asesor Jurídico."],
                    },
                    Subtopic {
                        title: "Imputado",
                        details: &["Persona señalada de cometer el delito. Tiene derecho a defensa técnica."],
                    },
                    Subtopic {
                        title: "Defensor",
                        details: &["Licenciado en derecho que asiste al imputado."],
                    },
                    Subtopic {
                        title: "Juez de Control",
                        details: &["Interviene desde el inicio hasta el auto de apertura a juicio. Cuida los derechos humanos."],
                    },
                    Subtopic {
                        title: "Tribunal de Enjuiciamiento",
                        details: &["1 o 3 jueces que presencian el juicio y dictan sentencia."],
                    },
                ],
            },
            Topic {
                id: "recursos",
                title: "Medios de Impugnación",
                content: "Herramientas para combatir resoluciones judiciales.",
                subtopics: &[
                    Subtopic {
                        title: "Revocación",
                        details: &["Para resoluciones de mero trámite sin sustanciación."],
                    },
                    Subtopic {
                        title: "Apelación",
                        details: &["Contra resoluciones importantes (vinculación, exclusión de pruebas, sentencia). Lo resuelve el Tribunal de Alzada."],
                    },
                ],
            },
            Topic {
                id: "amparo",
                title: "El Amparo",
                content: "Medio de control constitucional para proteger derechos fundamentales.",
                subtopics: &[
                    Subtopic {
                        title: "Amparo Indirecto",
                        details: &["Procede contra actos fuera, después o concluido el juicio que afecten sustantivamente derechos (ej. orden de aprehensión, auto de vinculación)."],
                    },
                    Subtopic {
                        title: "Amparo Directo",
                        details: &["Procede contra sentencias definitivas que ponen fin al juicio."],
                    },
                ],
            },
        ],
    },
];
