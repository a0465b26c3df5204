// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FASE 2: CONTEXTO E PROMPT DE ANÁLISE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::fmt::Write as _;

use crate::types::BusinessProfile;

use super::research::WebResearch;

const NOT_INFORMED: &str = "Não informado";

/// Schema JSON pedido ao gerador. As chaves de primeiro nível são as nove
/// seções da análise.
pub const ANALYSIS_SCHEMA: &str = r#"{
  "avatar_ultra_detalhado": {
    "nome_ficticio": "Nome representativo ultra-específico",
    "perfil_demografico_completo": {
      "idade_especifica": "Faixa etária com dados precisos do IBGE",
      "genero_distribuicao": "Distribuição exata por gênero com percentuais",
      "renda_detalhada": "Faixa de renda com dados de pesquisas recentes",
      "escolaridade_completa": "Nível educacional com especialização",
      "localizacao_geografica": "Cidades e regiões específicas com dados",
      "estado_civil_detalhado": "Status com implicações comportamentais",
      "filhos_situacao": "Situação familiar e impacto nas decisões",
      "profissao_especifica": "Ocupações exatas com responsabilidades",
      "tempo_mercado": "Anos de experiência no segmento",
      "nivel_hierarquico": "Posição na empresa/carreira"
    },
    "perfil_psicografico_profundo": {
      "personalidade_mbti": "Tipo MBTI com análise comportamental",
      "valores_centrais": "Sistema de valores com priorização",
      "interesses_especificos": "Hobbies e paixões com tempo dedicado",
      "estilo_vida_detalhado": "Rotina diária e semanal completa",
      "comportamento_compra_completo": "Processo decisório com gatilhos",
      "influenciadores_especificos": "Pessoas e marcas que seguem",
      "medos_viscerais": "Medos profundos com origem psicológica",
      "aspiracoes_secretas": "Sonhos não confessados com motivações",
      "frustrações_atuais": "Irritações diárias e semanais",
      "motivadores_primarios": "O que realmente move suas decisões",
      "bloqueios_mentais": "Crenças limitantes específicas",
      "gatilhos_emocionais": "O que desperta emoções fortes"
    },
    "dores_viscerais_ultra": ["Lista de 15-20 dores específicas e viscerais"],
    "desejos_secretos_profundos": ["Lista de 15-20 desejos profundos e inconfessáveis"],
    "objecoes_reais_completas": ["Lista de 12-15 objeções específicas com raiz emocional"],
    "jornada_emocional_detalhada": {
      "pre_consciencia": "Estado antes de perceber o problema",
      "despertar_dor": "Como toma consciência da dor",
      "busca_inicial": "Primeiras tentativas de solução",
      "frustração_acumulada": "Quando tentativas falham",
      "momento_decisao": "O que força a buscar ajuda externa",
      "avaliacao_opcoes": "Como compara diferentes soluções",
      "momento_compra": "Fatores decisivos finais",
      "pos_compra_imediato": "Primeiras 48 horas após compra",
      "implementacao": "Processo de colocar em prática",
      "primeiros_resultados": "Quando vê primeiros sinais",
      "consolidacao": "Quando se torna hábito/sistema"
    },
    "linguagem_interna_completa": {
      "frases_dor_especificas": ["15 frases exatas que usa para expressar dor"],
      "frases_desejo_especificas": ["15 frases exatas que usa para expressar desejos"],
      "metaforas_universo": ["Metáforas específicas do universo dele"],
      "vocabulario_tecnico": ["Jargões e termos técnicos que usa"],
      "expressoes_cotidianas": ["Expressões do dia a dia"],
      "tom_comunicacao_detalhado": "Como se comunica em diferentes contextos",
      "canais_preferidos": "Onde consome informação e como",
      "horarios_atencao": "Quando está mais receptivo a mensagens"
    },
    "drivers_mentais_personalizados": ["Gatilhos psicológicos específicos para este avatar"]
  },
  "escopo_posicionamento_ultra": {
    "posicionamento_mercado_detalhado": "Posicionamento único com diferenciação clara",
    "proposta_valor_irresistivel": "Proposta impossível de recusar",
    "diferenciais_competitivos_defensaveis": ["Diferenciais únicos e defensáveis"],
    "mensagem_central_poderosa": "Mensagem que resume tudo em uma frase",
    "tom_comunicacao_especifico": "Tom exato para este avatar",
    "nicho_ultra_especifico": "Nicho mais específico possível",
    "estrategia_oceano_azul": "Como criar mercado sem concorrência",
    "ancoragem_preco_psicologica": "Como ancorar preço na mente",
    "storytelling_marca": "História da marca que conecta emocionalmente",
    "manifesto_movimento": "Manifesto que cria movimento/tribo"
  },
  "analise_concorrencia_ultra_profunda": [
    {
      "nome_concorrente": "Nome real do concorrente",
      "analise_swot_detalhada": {
        "forcas_especificas": ["Forças específicas com dados"],
        "fraquezas_exploraveis": ["Fraquezas que podemos explorar"],
        "oportunidades_nao_vistas": ["Oportunidades que eles não veem"],
        "ameacas_representadas": ["Ameaças específicas que representam"]
      },
      "estrategia_marketing_completa": "Estratégia detalhada com canais e táticas",
      "posicionamento_atual": "Como se posicionam exatamente",
      "vulnerabilidades_especificas": ["Pontos fracos exploráveis"],
      "preco_estrategia_detalhada": "Como precificam e por quê",
      "share_mercado_estimado": "Participação estimada com dados",
      "estrategia_superacao": "Como superá-los especificamente"
    }
  ],
  "estrategia_palavras_chave_ultra": {
    "palavras_primarias_volume_alto": ["15-20 palavras com volume alto e intenção comercial"],
    "palavras_secundarias_complementares": ["30-40 palavras secundárias estratégicas"],
    "palavras_cauda_longa_especificas": ["50-60 palavras de cauda longa ultra-específicas"],
    "intencao_busca_detalhada": {
      "informacional_educativa": ["Palavras para educar o mercado"],
      "navegacional_marca": ["Palavras para encontrar a marca"],
      "transacional_compra": ["Palavras para conversão direta"],
      "investigativa_comparacao": ["Palavras para comparar soluções"]
    },
    "estrategia_conteudo_completa": "Como usar palavras-chave estrategicamente",
    "sazonalidade_detalhada": "Variações sazonais com dados históricos",
    "gaps_concorrencia": "Palavras que concorrentes não exploram"
  },
  "metricas_performance_ultra_detalhadas": {
    "kpis_principais_especificos": [
      {
        "metrica": "Nome da métrica específica",
        "objetivo_numerico": "Valor objetivo com justificativa",
        "frequencia_medicao": "Quando e como medir",
        "responsavel_acompanhamento": "Quem acompanha",
        "acao_desvio": "O que fazer se desviar"
      }
    ],
    "projecoes_financeiras_detalhadas": {
      "cenario_conservador_detalhado": {
        "receita_mensal_especifica": "Valor com cálculo detalhado",
        "clientes_mes_especifico": "Número com base em dados",
        "ticket_medio_justificado": "Valor com justificativa",
        "margem_lucro_calculada": "Margem com breakdown de custos",
        "break_even_especifico": "Quando atinge ponto de equilíbrio"
      },
      "cenario_realista_detalhado": {},
      "cenario_otimista_detalhado": {}
    },
    "roi_detalhado": "ROI com cálculo completo e timeline",
    "payback_especifico": "Tempo exato de retorno do investimento",
    "lifetime_value_calculado": "LTV com dados comportamentais",
    "benchmarks_industria": "Comparação com padrões do setor"
  },
  "plano_acao_ultra_detalhado": {
    "fase_1_preparacao_completa": {
      "duracao_especifica": "Tempo exato com justificativa",
      "atividades_detalhadas": ["Atividades específicas com responsáveis"],
      "investimento_breakdown": "Breakdown completo do investimento",
      "entregas_especificas": ["Entregas tangíveis com critérios"],
      "riscos_identificados": ["Riscos específicos e mitigação"],
      "marcos_controle": ["Pontos de controle e validação"]
    },
    "fase_2_lancamento_completa": {},
    "fase_3_crescimento_completa": {},
    "cronograma_detalhado": "Cronograma semana a semana por 12 meses",
    "orçamento_completo": "Orçamento detalhado por categoria e período",
    "equipe_necessaria": "Perfis específicos com responsabilidades"
  },
  "predicoes_futuro_ultra": {
    "tendencias_emergentes_especificas": ["Tendências que vão impactar o segmento"],
    "oportunidades_futuras_detalhadas": ["Oportunidades que vão surgir"],
    "ameacas_potenciais_especificas": ["Ameaças que podem surgir"],
    "pontos_inflexao_criticos": ["Momentos críticos que vão definir o futuro"],
    "cenarios_futuros_detalhados": {
      "cenario_1_evolucao_natural": "Descrição detalhada do cenário",
      "cenario_2_aceleracao": "Descrição detalhada do cenário",
      "cenario_3_disrupcao": "Descrição detalhada do cenário"
    },
    "timeline_futuro": "Timeline detalhada dos próximos 5 anos",
    "preparacao_necessaria": "Como se preparar para cada cenário"
  },
  "insights_exclusivos_gigantes": ["30-40 insights únicos, específicos e acionáveis"],
  "inteligencia_mercado_ultra": {
    "dados_exclusivos": "Dados que só esta análise revelou",
    "padrões_ocultos": "Padrões que ninguém mais identificou",
    "correlações_descobertas": "Correlações únicas encontradas",
    "gaps_mercado_especificos": "Lacunas específicas identificadas",
    "inovacoes_disruptivas_previstas": "Inovações que vão surgir",
    "mudancas_comportamentais": "Como o consumidor vai mudar",
    "evolucao_tecnologica": "Como a tecnologia vai evoluir",
    "impactos_regulatorios": "Mudanças regulatórias esperadas"
  }
}"#;

/// Monta o bloco de contexto (dados do projeto + resultados da pesquisa),
/// truncado em `char_limit` caracteres.
pub fn build_context(
    profile: &BusinessProfile,
    research: &WebResearch,
    max_results: usize,
    char_limit: usize,
) -> String {
    let field = |value: Option<&str>| value.unwrap_or(NOT_INFORMED).to_string();

    let mut context = String::from("\nCONTEXTO ULTRA-COMPLETO PARA ANÁLISE GIGANTE:\n\n");
    context.push_str("=== DADOS DO PROJETO ===\n");
    let _ = writeln!(context, "Segmento: {}", field(profile.segment()));
    let _ = writeln!(context, "Produto/Serviço: {}", field(profile.product()));
    let _ = writeln!(context, "Preço: R$ {}", field(profile.price.as_deref()));
    let _ = writeln!(context, "Público-Alvo: {}", field(profile.audience.as_deref()));
    let _ = writeln!(context, "Concorrentes: {}", field(profile.competitors.as_deref()));
    let _ = writeln!(context, "Objetivo Receita: R$ {}", field(profile.revenue_goal.as_deref()));
    let _ = writeln!(
        context,
        "Orçamento Marketing: R$ {}",
        field(profile.marketing_budget.as_deref())
    );
    let _ = writeln!(context, "Prazo Lançamento: {}", field(profile.launch_deadline.as_deref()));
    let _ = writeln!(context, "Dados Adicionais: {}", field(profile.additional_info.as_deref()));
    context.push_str("\n=== PESQUISA WEB ULTRA-PROFUNDA ===\n");

    if !research.is_empty() {
        let _ = writeln!(context, "\nTotal de Resultados: {}", research.total_results);
        let _ = writeln!(context, "Fontes Únicas: {}", research.unique_sources);
        let _ = writeln!(context, "Provedores: {}", research.providers.join(", "));
        context.push_str("\nRESULTADOS DETALHADOS:\n");

        for (i, hit) in research.hits.iter().take(max_results).enumerate() {
            let _ = write!(
                context,
                "\n--- RESULTADO {} ---\nTítulo: {}\nURL: {}\nSnippet: {}\nFonte: {}\n\n",
                i + 1,
                or_placeholder(&hit.title, "Sem título"),
                or_placeholder(&hit.url, "Sem URL"),
                or_placeholder(&hit.snippet, "Sem descrição"),
                or_placeholder(&hit.source, "Desconhecida"),
            );
        }
    }

    truncate_chars(&context, char_limit)
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Prompt completo de análise com o contexto embutido
pub fn build_prompt(context: &str) -> String {
    format!(
        r#"
# ANÁLISE GIGANTE ULTRA-DETALHADA

Você é o SUPREMO ANALISTA DE MERCADO, com décadas de experiência combinada em análise de mercado, psicologia comportamental, estratégia empresarial, predição de tendências e arquitetura de persuasão.

MISSÃO: gerar a análise mais completa, profunda e preditiva possível para este projeto.

{context}

## INSTRUÇÕES PARA ANÁLISE GIGANTE:

Esta análise será usada para decisões estratégicas. Deve ser ultra-detalhada, preditiva e baseada nos dados da pesquisa.

Gere a análise em formato JSON estruturado:

```json
{schema}
```

CRÍTICO:
- Use APENAS dados REAIS da pesquisa fornecida
- Seja ULTRA-ESPECÍFICO em cada campo
- Gere insights que NINGUÉM MAIS tem
- Responda somente com o JSON
- NUNCA use dados genéricos ou simulados
"#,
        context = context,
        schema = ANALYSIS_SCHEMA,
    )
}

/// Trunca em `max` caracteres (nunca corta um caractere UTF-8 ao meio)
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SECTION_KEYS;
    use crate::types::SearchHit;

    fn research_with(n: usize) -> WebResearch {
        let hits = (0..n)
            .map(|i| SearchHit::new(format!("Título {i}"), format!("https://site{i}.com"), "trecho", "jina"))
            .collect();
        WebResearch::from_hits(vec!["q".into()], hits)
    }

    #[test]
    fn test_context_defaults_to_not_informed() {
        let context = build_context(&BusinessProfile::default(), &WebResearch::default(), 20, 15_000);
        assert!(context.contains("CONTEXTO ULTRA-COMPLETO PARA ANÁLISE GIGANTE:"));
        assert!(context.contains("Segmento: Não informado"));
        assert!(context.contains("Preço: R$ Não informado"));
        assert!(context.contains("=== PESQUISA WEB ULTRA-PROFUNDA ==="));
        assert!(!context.contains("RESULTADOS DETALHADOS"));
    }

    #[test]
    fn test_context_embeds_at_most_max_results() {
        let mut profile = BusinessProfile::with_segment("odontologia");
        profile.price = Some("1500".into());
        let context = build_context(&profile, &research_with(25), 20, 100_000);

        assert!(context.contains("Segmento: odontologia"));
        assert!(context.contains("Preço: R$ 1500"));
        assert!(context.contains("Total de Resultados: 25"));
        assert!(context.contains("--- RESULTADO 20 ---"));
        assert!(!context.contains("--- RESULTADO 21 ---"));
    }

    #[test]
    fn test_context_is_capped_on_char_boundary() {
        let mut profile = BusinessProfile::with_segment("ç".repeat(20_000));
        profile.product = Some("ã".repeat(100));
        let context = build_context(&profile, &research_with(25), 20, 15_000);
        assert_eq!(context.chars().count(), 15_000);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("ação", 2), "aç");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn test_prompt_lists_every_section() {
        let prompt = build_prompt("CONTEXTO");
        assert!(prompt.contains("# ANÁLISE GIGANTE ULTRA-DETALHADA"));
        assert!(prompt.contains("CONTEXTO"));
        for key in SECTION_KEYS {
            assert!(prompt.contains(key), "schema sem a seção {key}");
        }
    }

    #[test]
    fn test_schema_is_valid_json() {
        let schema: serde_json::Value = serde_json::from_str(ANALYSIS_SCHEMA).unwrap();
        assert_eq!(schema.as_object().map(|o| o.len()), Some(9));
    }
}
