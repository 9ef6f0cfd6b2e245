//! Hard-coded content of the NUREPDH report (2ª DIREC/RN, 2023–2025).

use super::chart::{BarLayout, ChartConfig, ChartKind, DataPoint, SeriesColor};
use super::report::{
    Align, AppAccess, Attachment, Author, Callout, DocumentItem, Footer, Hero, Highlight, Section,
    SectionId, TimelineEvent, Tone, Video,
};

use SeriesColor::{Amber, Blue, Lime, Orange, Red};

pub fn hero() -> Hero {
    Hero {
        badge: "2ª DIREC/RN",
        title_lead: "A cultura de paz como prática institucional:",
        title_tail: "identidade pedagógica da 2ª DIREC",
        tagline: "Uma experiência de transformação social: promovendo a Cultura de Paz e Direitos \
                  Humanos nas escolas (2023-2026).",
    }
}

fn section(id: SectionId, title: &'static str, icon: char) -> Section {
    Section {
        id,
        title,
        icon,
        collapsible: true,
        default_expanded: false,
        paragraphs: Vec::new(),
        highlights: Vec::new(),
        callout: None,
        attachment: Attachment::None,
        search_blurb: None,
    }
}

fn plain(id: SectionId, title: &'static str, icon: char, attachment: Attachment) -> Section {
    Section {
        collapsible: false,
        default_expanded: true,
        attachment,
        ..section(id, title, icon)
    }
}

pub fn sections() -> Vec<Section> {
    vec![
        Section {
            default_expanded: true,
            paragraphs: vec![
                "Este projeto apresenta a trajetória de três anos do Núcleo Regional de Educação para a \
                 Paz e Direitos Humanos (NUREPDH) da 2ª DIREC/RN. A experiência foi pioneira no estado e \
                 inspirou a institucionalização de núcleos em todas as 16 regionais. Os resultados \
                 expressam uma transformação significativa nas escolas, com maior integração \
                 comunitária, fortalecimento de vínculos e redução de conflitos.",
            ],
            search_blurb: Some(
                "Trajetória de três anos do Núcleo Regional de Educação para a Paz e Direitos Humanos. \
                 Transformação significativa nas escolas, integração comunitária, redução de conflitos.",
            ),
            ..section(SectionId::Summary, "Resumo", '⌂')
        },
        Section {
            paragraphs: vec![
                "O presente relatório consolidado reúne as ações desenvolvidas pelo NUREPDH da 2ª DIREC \
                 entre os anos de 2023 e 2025. A partir da criação dos NUEEPDHs, o trabalho das \
                 multiplicadoras passou a abranger 41 escolas, articulando práticas restaurativas, \
                 formações continuadas e projetos de protagonismo juvenil.",
            ],
            search_blurb: Some(
                "Relatório consolidado 2023-2025. NUEEPDHs, multiplicadoras, 41 escolas, práticas \
                 restaurativas, formações continuadas.",
            ),
            ..section(SectionId::Introduction, "1. Introdução", '▯')
        },
        Section {
            paragraphs: vec![
                "Promover uma cultura de não violência no ambiente escolar, fortalecendo vínculos, o \
                 cuidado emocional e a convivência pacífica, por meio de ações integradas de educação \
                 para a paz, justiça restaurativa, saúde mental, protagonismo juvenil e fortalecimento \
                 da rede escola-família.",
            ],
            search_blurb: Some(
                "Promover cultura de não violência, fortalecer vínculos, cuidado emocional, convivência \
                 pacífica, justiça restaurativa.",
            ),
            ..section(SectionId::Objective, "2. Objetivo Geral", '◎')
        },
        Section {
            paragraphs: vec![
                "A construção de uma cultura de paz na escola exige uma abordagem educativa integral. \
                 Segundo Xesús R. Jares (1999), educar para a paz implica desenvolver competências para \
                 o diálogo. Edgar Morin (2000) reforça a ética planetária. A fundamentação apoia-se em \
                 espaços escolares seguros e reflexivos onde o respeito às diferenças é prática \
                 cotidiana.",
            ],
            search_blurb: Some(
                "Xesús R. Jares, Edgar Morin. Educar para a paz, competências para o diálogo, ética \
                 planetária, espaços escolares seguros.",
            ),
            ..section(SectionId::Foundations, "3. Fundamentação Teórica", 'ⓘ')
        },
        Section {
            paragraphs: vec![
                "A metodologia adotada foi de natureza qualitativa e descritiva, baseada em análise \
                 documental dos planos de ação, relatórios anuais e projetos específicos. Foram \
                 utilizados instrumentos de monitoramento como formulários digitais e protocolos de \
                 mediação.",
            ],
            search_blurb: Some(
                "Natureza qualitativa e descritiva, análise documental, planos de ação, relatórios \
                 anuais, formulários digitais.",
            ),
            ..section(SectionId::Methodology, "4. Metodologia", '∿')
        },
        Section {
            paragraphs: vec![
                "Com base nas respostas de 4.271 participantes, esta avaliação analisa o clima escolar \
                 nas instituições da 2ª DIREC.",
            ],
            highlights: vec![
                Highlight {
                    title: "Pontos Fortes",
                    text: "A clareza sobre os canais de suporte foi um destaque positivo, com 86,5% dos \
                           participantes afirmando saber a quem recorrer em situações de conflito. Além \
                           disso, o ambiente escolar demonstrou-se acolhedor, sendo percebido como \
                           inclusivo por 70,1% da comunidade. As relações institucionais também se \
                           mostraram sólidas, com 80,78% relatando respeito frequente entre professores \
                           e funcionários.",
                    tone: Tone::Positive,
                },
                Highlight {
                    title: "Atenção Necessária",
                    text: "O cenário revelou desafios críticos: 26,9% dos respondentes presenciaram ou \
                           sofreram violência, e o respeito entre alunos foi classificado como instável \
                           (\"às vezes\") por 45,19%. Um dado alarmante foi a percepção sobre o \
                           bullying, onde 80% sentiram falta de suporte específico da escola, indicando \
                           uma lacuna urgente nas estratégias de intervenção.",
                    tone: Tone::Attention,
                },
            ],
            attachment: Attachment::Charts(super::report::SurveyYear::Y2024),
            search_blurb: Some("Diagnóstico com 4.271 participantes. Pontos fortes e atenção necessária."),
            ..section(SectionId::Climate2024, "5. Avaliação do Clima Escolar 2024", '↗')
        },
        Section {
            paragraphs: vec![
                "Dados consolidados de 2025 (1.399 respostas) mostrando a evolução dos indicadores após \
                 intervenções.",
            ],
            highlights: vec![
                Highlight {
                    title: "Avanços Significativos",
                    text: "Houve uma melhora substancial na sensação de segurança, com o índice \
                           \"Sempre\" subindo para 45,2%. A incidência de violência presenciada caiu para \
                           21,5%, e a frequência diária desses atos reduziu pela metade (10,5%). \
                           Destaca-se o salto na percepção de suporte ao bullying, que saiu de 19% para \
                           44,6%, refletindo a eficácia das novas políticas implementadas.",
                    tone: Tone::Positive,
                },
                Highlight {
                    title: "Consolidação",
                    text: "A rede de apoio se fortaleceu, com 89,2% sabendo exatamente a quem recorrer. \
                           O engajamento discente cresceu, com 45,5% sentindo-se sempre confortáveis em \
                           participar. A cultura de respeito institucional atingiu quase 90%, e a \
                           percepção de um ambiente inclusivo consolidou-se em 79,3%, demonstrando o \
                           enraizamento das práticas restaurativas.",
                    tone: Tone::Positive,
                },
            ],
            attachment: Attachment::Charts(super::report::SurveyYear::Y2025),
            search_blurb: Some("Resultados com 1.399 respostas. Avanços significativos e consolidação."),
            ..section(SectionId::Climate2025, "6. Avaliação do Clima Escolar 2025", '↗')
        },
        Section {
            default_expanded: true,
            attachment: Attachment::Timeline,
            search_blurb: Some("Timeline, linha do tempo, marcos históricos do projeto."),
            ..section(SectionId::Development, "7. Desenvolvimento e Resultados", '✪')
        },
        Section {
            paragraphs: vec![
                "Os resultados demonstraram fortalecimento do clima escolar, redução dos conflitos \
                 interpessoais e ampliação do sentimento de pertencimento. O legado deste trabalho é um \
                 exemplo de que a educação pode ser instrumento de reconstrução social.",
            ],
            callout: Some(Callout {
                title: "Referência Estadual",
                text: "O NUREPDH consolidou-se como modelo, inspirando a portaria SEEC/RN que instituiu \
                       núcleos em todas as regionais.",
            }),
            search_blurb: Some(
                "Fortalecimento do clima escolar, redução de conflitos, referência estadual, portaria \
                 SEEC/RN.",
            ),
            ..section(SectionId::Impacts, "8. Impactos e Considerações Finais", '▤')
        },
        Section {
            search_blurb: Some("Fotos, imagens e registros visuais das ações."),
            ..plain(SectionId::Gallery, "Galeria de Momentos", '▣', Attachment::Gallery)
        },
        plain(SectionId::Videos, "Registros Audiovisuais", '▶', Attachment::Videos),
        plain(SectionId::Documents, "Documentos e Planos", '▥', Attachment::Documents),
        Section {
            attachment: Attachment::References,
            search_blurb: Some("Bibliografia, autores, leis e bases teóricas."),
            ..section(SectionId::References, "Referências", '❏')
        },
        plain(SectionId::AppAccess, "Acesse o Aplicativo", '▦', Attachment::AppAccess),
    ]
}

// ───────────────────────────────────────── charts ────────────

fn chart(
    id: &'static str,
    title: &'static str,
    kind: ChartKind,
    layout: BarLayout,
    summary: &'static str,
    data: Vec<DataPoint>,
) -> ChartConfig {
    ChartConfig {
        id,
        title,
        kind,
        layout,
        data,
        summary: Some(summary),
    }
}

fn bars(id: &'static str, title: &'static str, layout: BarLayout, summary: &'static str, data: Vec<DataPoint>) -> ChartConfig {
    chart(id, title, ChartKind::Bar, layout, summary, data)
}

fn pie(id: &'static str, title: &'static str, summary: &'static str, data: Vec<DataPoint>) -> ChartConfig {
    chart(id, title, ChartKind::Pie, BarLayout::default(), summary, data)
}

fn area(id: &'static str, title: &'static str, summary: &'static str, data: Vec<DataPoint>) -> ChartConfig {
    chart(id, title, ChartKind::Area, BarLayout::default(), summary, data)
}

fn p(name: &'static str, value: f64) -> DataPoint {
    DataPoint::new(name, value)
}

fn c(name: &'static str, value: f64, color: SeriesColor) -> DataPoint {
    DataPoint::colored(name, value, color)
}

pub fn charts_2024() -> Vec<ChartConfig> {
    use BarLayout::{Columns, Rows};
    vec![
        bars("q1", "1. Qual é o seu papel?", Rows,
            "A pesquisa teve adesão massiva do corpo discente, representando mais de 85% dos respondentes.",
            vec![p("Funcionário", 2.88), p("Professor", 11.54), p("Aluno", 85.58)]),
        area("q2", "2. Se aluno(a), em qual ano está?",
            "Distribuição equilibrada entre os anos finais do fundamental, com leve pico no 6º e 8º anos.",
            vec![p("6º", 19.23), p("7º", 13.46), p("8º", 19.23), p("9º", 15.38), p("1º Méd", 17.31), p("3º Méd", 1.92)]),
        pie("q3", "3. Você se sente seguro(a)?",
            "Embora 39% sintam-se sempre seguros, a soma de \"Às vezes\" e \"Nunca\" revela uma vulnerabilidade significativa.",
            vec![c("Sempre", 39.42, Red), c("Frequente", 17.31, Orange), c("Às Vezes", 28.85, Amber), c("Nunca", 9.62, Lime), c("Raramente", 4.81, Blue)]),
        pie("q4", "4. Presenciou/sofreu violência?",
            "Mais de um quarto dos entrevistados (26.9%) relatou contato direto com situações de violência escolar.",
            vec![c("Não", 73.08, Red), c("Sim", 26.92, Orange)]),
        bars("q5", "5. Se sim, com que frequência?", Columns,
            "Dentre os que presenciaram violência, a maior parte relata ocorrências raras, mas 20% indicam frequência diária.",
            vec![p("Raramente", 33.65), p("Diariamente", 20.19), p("Mensalmente", 19.23), p("Semanalmente", 7.69)]),
        bars("q6", "6. Alunos tratam colegas com respeito?", Rows,
            "O respeito entre pares é um ponto crítico, com 45% afirmando que ocorre apenas \"às vezes\".",
            vec![p("Nunca", 3.85), p("Raramente", 15.38), p("Frequente", 18.27), p("Sempre", 17.31), p("Às Vezes", 45.19)]),
        bars("q7", "7. Respeito entre prof. e funcionários?", Rows,
            "Alta positividade nas relações institucionais, com mais de 80% relatando respeito frequente.",
            vec![p("Nunca", 1.92), p("Raramente", 2.88), p("Às Vezes", 14.42), p("Frequente", 80.78)]),
        pie("q8", "8. Sabe a quem recorrer?",
            "A grande maioria (86.5%) conhece os canais de ajuda, indicando boa comunicação institucional.",
            vec![c("Sim", 86.54, Red), c("Não", 13.46, Orange)]),
        pie("q9", "9. Escola oferece suporte (bullying)?",
            "Um dado alarmante de 2024: 80% percebiam ausência de suporte específico para bullying.",
            vec![c("Não", 80.77, Red), c("Sim", 19.23, Amber)]),
        area("q10", "10. Aconselhamento é acessível?",
            "Apesar das lacunas no suporte ao bullying, 64% consideram o aconselhamento geral acessível.",
            vec![p("Sim", 64.42), p("Não Sei", 25.96), p("Não", 9.62)]),
        bars("q11", "11. Ambiente é inclusivo?", Rows,
            "A percepção de inclusão é majoritariamente positiva (70%), mas há margem para melhoria.",
            vec![p("Não", 4.81), p("Às Vezes", 25.00), p("Sim", 70.19)]),
        pie("q12", "12. Instalações contribuem p/ segurança?",
            "A infraestrutura divide opiniões, com apenas 48% afirmando que ela contribui plenamente para a segurança.",
            vec![c("Sim", 48.08, Red), c("Às Vezes", 36.54, Orange), c("Não", 15.38, Amber)]),
        bars("q13", "13. Confortável em participar de atividades?", Columns,
            "O engajamento é moderado, com cerca de 27% dos alunos não se sentindo confortáveis em participar.",
            vec![p("Sim", 38.46), p("Às Vezes", 33.65), p("Não", 27.89)]),
        pie("q14", "14. Análise de Sentimento e sugestões",
            "A análise textual revelou um tom predominantemente neutro/informativo nas respostas abertas.",
            vec![c("Neutro", 98.34, Red), c("Positivo", 1.0, Orange), c("Negativo", 0.66, Amber)]),
    ]
}

pub fn charts_2025() -> Vec<ChartConfig> {
    use BarLayout::{Columns, Rows};
    vec![
        bars("q1_25", "1. Qual é o seu papel?", Rows,
            "Manutenção do perfil demográfico, com alunos representando a vasta maioria da amostra.",
            vec![p("Func.", 4.1), p("Prof.", 10.2), p("Aluno", 85.7)]),
        area("q2_25", "2. Se aluno(a), em qual ano está?",
            "Distribuição homogênea entre as séries, garantindo representatividade de todos os ciclos.",
            vec![p("6º", 18.5), p("7º", 14.2), p("8º", 18.8), p("9º", 16.1), p("1º Méd", 18.2), p("3º Méd", 14.2)]),
        pie("q3_25", "3. Você se sente seguro(a)?",
            "Melhora significativa: o sentimento de segurança constante subiu de 39% (2024) para 45.2%.",
            vec![c("Sempre", 45.2, Red), c("Frequente", 22.5, Orange), c("Às Vezes", 20.1, Amber), c("Nunca", 7.2, Lime), c("Raramente", 5.0, Blue)]),
        pie("q4_25", "4. Presenciou/sofreu violência?",
            "Redução na percepção de violência: índice caiu de 26.9% para 21.5% após intervenções.",
            vec![c("Não", 78.5, Red), c("Sim", 21.5, Orange)]),
        bars("q5_25", "5. Se sim, com que frequência?", Columns,
            "A frequência diária de violência caiu pela metade (de 20% para 10.5%), indicando eficácia das ações.",
            vec![p("Raramente", 48.2), p("Diariamente", 10.5), p("Mensalmente", 25.1), p("Semanalmente", 16.2)]),
        bars("q6_25", "6. Alunos tratam colegas com respeito?", Rows,
            "Avanço no convívio: percepção de respeito \"Sempre\" ou \"Frequente\" cresceu consideravelmente.",
            vec![p("Nunca", 2.1), p("Raramente", 10.5), p("Frequente", 25.4), p("Sempre", 28.2), p("Às Vezes", 33.8)]),
        bars("q7_25", "7. Respeito entre prof. e funcionários?", Rows,
            "Clima organizacional permanece excelente, atingindo quase 90% de percepção frequente de respeito.",
            vec![p("Nunca", 0.5), p("Raramente", 1.2), p("Às Vezes", 8.5), p("Frequente", 89.8)]),
        pie("q8_25", "8. Sabe a quem recorrer?",
            "Leve aumento no conhecimento dos canais de suporte (89.2%), reforçando a comunicação.",
            vec![c("Sim", 89.2, Red), c("Não", 10.8, Orange)]),
        pie("q9_25", "9. Escola oferece suporte (bullying)?",
            "O maior salto da pesquisa: percepção de suporte ao bullying saltou de 19% para 44.6%.",
            vec![c("Não", 55.4, Red), c("Sim", 44.6, Amber)]),
        area("q10_25", "10. Aconselhamento é acessível?",
            "Acessibilidade ao aconselhamento subiu para 78.5%, refletindo a presença ativa dos núcleos.",
            vec![p("Sim", 78.5), p("Não Sei", 15.2), p("Não", 6.3)]),
        bars("q11_25", "11. Ambiente é inclusivo?", Rows,
            "Percepção de inclusão atingiu quase 80%, consolidando a cultura de acolhimento.",
            vec![p("Não", 2.5), p("Às Vezes", 18.2), p("Sim", 79.3)]),
        pie("q12_25", "12. Instalações contribuem p/ segurança?",
            "Melhora na percepção da infraestrutura (58.4%), possivelmente ligada à melhoria do clima geral.",
            vec![c("Sim", 58.4, Red), c("Às Vezes", 30.1, Orange), c("Não", 11.5, Amber)]),
        bars("q13_25", "13. Participação confortável?", Columns,
            "Aumento no conforto em participar (\"Sempre\" foi a 45.5%), indicando maior protagonismo.",
            vec![p("Sempre", 45.5), p("Às Vezes", 28.1), p("Nunca", 26.4)]),
        pie("q14_25", "14. Análise de Sentimento",
            "Ligeiro aumento na positividade das respostas abertas, acompanhando a melhora nos indicadores.",
            vec![c("Neutro", 96.0, Red), c("Positivo", 3.2, Orange), c("Negativo", 0.8, Amber)]),
    ]
}

// ───────────────────────────────────────── timeline ──────────

pub fn timeline() -> Vec<TimelineEvent> {
    vec![
        TimelineEvent {
            year: "2023",
            title: "Implementação dos Núcleos",
            description: "Foco na criação e implantação dos 41 Núcleos Escolares de Educação para a Paz \
                          e Direitos Humanos (NUEEPDHs). Diagnóstico das escolas, formações iniciais e \
                          parcerias com MP e TJ.",
            align: Align::Left,
        },
        TimelineEvent {
            year: "2024",
            title: "Consolidação e Expansão",
            description: "Realização de 24 capacitações, 25 processos circulares e 10 mediações \
                          exitosas. Criação do aplicativo de acompanhamento e rede de apoio \
                          socioassistencial.",
            align: Align::Right,
        },
        TimelineEvent {
            year: "2025",
            title: "Inovação e Sustentabilidade",
            description: "Implementação dos projetos \"Aluno Embaixador da Paz\" e \"Autocuidado e Saúde \
                          Mental\". Criação do protocolo para casos de não-aceitação de mediação.",
            align: Align::Left,
        },
    ]
}

// ───────────────────────────────────────── documents ─────────

pub fn plans() -> Vec<DocumentItem> {
    vec![
        DocumentItem { title: "Plano de ação 2023", url: "https://drive.google.com/file/d/1qITEWucXz1EvlRJJTNfc7mjTnDjMcsMy/view?usp=sharing" },
        DocumentItem { title: "Plano de ação 2024", url: "https://drive.google.com/file/d/1l_sO8lF_xxgtK8JLDKRuH5wezxH7hIkj/view?usp=sharing" },
        DocumentItem { title: "Plano de ação 2025", url: "https://drive.google.com/file/d/1ZvrlBGa7SNdPpdTmfqyC8ROKWMih_HcC/view?usp=sharing" },
        DocumentItem { title: "Plano de ação 2026", url: "https://drive.google.com/file/d/1ZvrlBGa7SNdPpdTmfqyC8ROKWMih_HcC/view?usp=sharing" },
    ]
}

pub fn documents() -> Vec<DocumentItem> {
    vec![
        DocumentItem { title: "Projeto Embaixador da Paz", url: "https://drive.google.com/file/d/1WuvM9Ycg1fc2IctijY4-NNnuQS4YU_xc/view?usp=drive_link" },
        DocumentItem { title: "Projeto Saúde Mental", url: "https://drive.google.com/file/d/1-ButtstXEFyEnWfRiM1hz-8IFYEROU8B/view?usp=drive_link" },
        DocumentItem { title: "Protocolo de Mediação", url: "https://drive.google.com/file/d/1lOhunV8iSgmwHOVixOjvCZ3yG4I8Yr21/view?usp=drive_link" },
        DocumentItem { title: "Relatório Retrospectiva", url: "https://drive.google.com/file/d/1PgGA6umiy4I5OZJkCn7IVb2g09Mne1fx/view?usp=drive_link" },
    ]
}

// ───────────────────────────────────────── media ─────────────

pub fn gallery() -> Vec<&'static str> {
    vec![
        "https://i.imgur.com/t25NA05.png", "https://i.imgur.com/nadk01u.png", "https://i.imgur.com/ZmL9Ag7.png",
        "https://i.imgur.com/6R0vW8A.png", "https://i.imgur.com/tp3Co6O.png", "https://i.imgur.com/HE6rwAZ.png",
        "https://i.imgur.com/6Yy6Evr.png", "https://i.imgur.com/pdrrnnV.png", "https://i.imgur.com/TPsJiO3.png",
        "https://i.imgur.com/PV2GyHp.png", "https://i.imgur.com/bceKuDM.png", "https://i.imgur.com/wKBAB05.png",
        "https://i.imgur.com/qpAk2Df.png", "https://i.imgur.com/cDARyA3.png", "https://i.imgur.com/cfW5vEH.png",
    ]
}

pub fn videos() -> Vec<Video> {
    vec![
        Video {
            title: "Formações e justiça restaurativa",
            url: "https://drive.google.com/file/d/1r-v9MShjYoGLVXi90s2AvkPyaQ8yFaRO/preview",
            thumbnail: "https://images.unsplash.com/photo-1577896851231-70ef18881754?q=80&w=1000&auto=format&fit=crop",
        },
        Video {
            title: "Projeto Trilhando a Paz - NUREPDH 2ª DIREC/MP RN e Escola Estadual Francisco Barbosa",
            url: "https://drive.google.com/file/d/1flWtDGONILOhzwHCnF33XzsQosUaITpR/preview",
            thumbnail: "https://images.unsplash.com/photo-1529070538774-1843cb3265df?q=80&w=1000&auto=format&fit=crop",
        },
        Video {
            title: "Embaixadores da Paz - Escola Estadual Dr. Antônio de Souza",
            url: "https://drive.google.com/file/d/1l4BMRWVp8Bt7iN-9TtwJwYauh7Ql9p8h/preview",
            thumbnail: "https://images.unsplash.com/photo-1497633762265-9d179a990aa6?q=80&w=1000&auto=format&fit=crop",
        },
        Video {
            title: "Cerimônia de posse - Alunos Embaixadores da Paz",
            url: "https://drive.google.com/file/d/1emSVCo-wr5Ob2QVqwpVl9PdhCspK_6tp/preview",
            thumbnail: "https://images.unsplash.com/photo-1517486808906-6ca8b3f04846?q=80&w=1000&auto=format&fit=crop",
        },
        Video {
            title: "Relato de Experiência: Protagonismo Juvenil e Cultura de Paz - CEEP Lourdinha Guerra.",
            url: "https://drive.google.com/file/d/1avm8DrXCy15Zgy9W05zvIMbVif81Ter1/preview",
            thumbnail: "https://images.unsplash.com/photo-1557804506-669a67965ba0?q=80&w=1000&auto=format&fit=crop",
        },
    ]
}

// ───────────────────────────────────────── back matter ───────

pub fn references() -> Vec<&'static str> {
    vec![
        "ABRAMOVAY, Miriam. Violências nas escolas. Flacso Brasil, 2015.",
        "ARENDT, Hannah. Eichmann em Jerusalém. São Paulo: Companhia das Letras, 1963.",
        "BOURDIEU, Pierre. Escritos de Educação. Petrópolis: Vozes, 1999.",
        "FREIRE, Paulo. Pedagogia da Autonomia. São Paulo: Paz e Terra, 1996.",
        "JARES, Xesús R. Educação para a Paz. Madrid: Editorial Popular, 1999.",
        "MORIN, Edgar. Os Sete Saberes Necessários à Educação do Futuro. São Paulo: Cortez, 2000.",
        "PICCOLI, L. M.; LENA, M. S.; GONÇALVES, T. R. Violência e sofrimento social no contexto escolar. Saúde e Sociedade, 2019.",
        "SPOSITO, Marília Pontes. Estudos sobre juventude e educação. Revista Brasileira de Educação, 1997.",
        "BRASIL. Lei nº 9.394/1996. Estabelece as Diretrizes e Bases da Educação Nacional.",
        "ONU/UNESCO. Declaração sobre uma Cultura de Paz, 1999.",
    ]
}

pub fn authors() -> Vec<Author> {
    vec![
        Author {
            name: "Albeísa Cleyse",
            surname: "Batista Farias",
            photo_url: "https://i.imgur.com/lG4TKTk.png",
            education: "Bacharela e Licenciada em Ciências Biológicas pela UFRN, pós-graduação em Gestão \
                        Ambiental.",
            experience: "Professora da Rede Estadual do RN desde 2012. Atua na 2ª DIREC/NUREPDH como \
                         técnica multiplicadora de EDH e mediadora de conflitos.",
        },
        Author {
            name: "Terezinha de Jesus",
            surname: "Saraiva",
            photo_url: "https://i.imgur.com/ujSR6FD.png",
            education: "Licenciatura em Pedagogia pela UVA, pós-graduação na UNP em Ensino Fundamental.",
            experience: "Professora da Rede Estadual desde 2001 e Municipal de Parnamirim desde 1997. Atua \
                         na 2ª DIREC/NUREPDH como técnica multiplicadora.",
        },
    ]
}

pub fn app_access() -> AppAccess {
    AppAccess {
        title: "Acesse o Aplicativo",
        qr_url: "https://i.imgur.com/5N6Lt0f.png",
        caption: "Escaneie para acessar o material completo e dados detalhados.",
        instagram_url: "https://instagram.com",
    }
}

pub fn footer() -> Footer {
    Footer {
        authors: "Autoras: Albeísa Farias e Terezinha Saraiva",
        place: "Parnamirim - RN, 2025",
        credits: "Desenvolvido com ❤ por Danilo Arruda",
    }
}
