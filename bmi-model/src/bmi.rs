use std::{fmt, num::ParseFloatError, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Body mass index in kg/m². Displayed with exactly two fractional digits.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub struct Bmi(f64);

impl Bmi {
    pub fn new(weight: f64, height: f64) -> Self {
        Self(weight / (height * height))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Bmi {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Exact hundredth ties are the odd eighths; those round up.
        let eighths = self.0 * 8.0;
        let value = if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
            (self.0 * 100.0).round() / 100.0
        } else {
            self.0
        };
        write!(f, "{:.2}", value)
    }
}

impl FromStr for Bmi {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// WHO weight bands. `Display` gives the label shown to the person being
/// assessed; serialization uses the variant name.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Classification {
    #[strum(to_string = "Abaixo do Peso")]
    BelowWeight,
    #[strum(to_string = "Peso Normal")]
    NormalWeight,
    #[strum(to_string = "Sobrepeso")]
    Overweight,
    #[strum(to_string = "Obesidade Grau I")]
    ObesityI,
    #[strum(to_string = "Obesidade Grau II")]
    ObesityII,
    #[strum(to_string = "Obesidade Grau III")]
    ObesityIII,
}

impl Classification {
    pub fn range(&self) -> &'static str {
        match self {
            Classification::BelowWeight => "Abaixo de 18.5",
            Classification::NormalWeight => "entre 18.5 e 24.9",
            Classification::Overweight => "entre 25.0 e 29.9",
            Classification::ObesityI => "entre 30.0 e 34.9",
            Classification::ObesityII => "entre 35.0 e 39.9",
            Classification::ObesityIII => "Acima de 40.0",
        }
    }

    pub fn narrative(&self) -> &'static str {
        match self {
            Classification::BelowWeight => "Seu IMC está abaixo da faixa de peso ideal. É importante buscar orientação para garantir que você está recebendo todos os nutrientes necessários para sua saúde.",
            Classification::NormalWeight => "Parabéns! Seu IMC está na faixa considerada ideal pela OMS. Manter hábitos saudáveis de alimentação e exercícios é a chave para continuar assim.",
            Classification::Overweight => "Seu IMC indica sobrepeso. Este é um sinal de alerta para um maior risco de desenvolver problemas de saúde. Pequenas mudanças no estilo de vida podem fazer uma grande diferença.",
            Classification::ObesityI => "Seu IMC está na faixa de Obesidade Grau I. Isso aumenta o risco de doenças como diabetes e hipertensão. É um bom momento para buscar apoio e iniciar mudanças.",
            Classification::ObesityII => "Seu IMC indica Obesidade Grau II (severa). O risco para a saúde é considerado alto. É altamente recomendável procurar orientação médica e nutricional para um plano de ação.",
            Classification::ObesityIII => "Seu IMC está na faixa de Obesidade Grau III (mórbida). Esta condição apresenta um risco muito elevado para a saúde. É crucial e urgente buscar ajuda médica especializada.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BmiResult {
    pub bmi: Bmi,
    pub classification: Classification,
    pub range: String,
    pub narrative: String,
}

impl BmiResult {
    pub fn new(bmi: Bmi, classification: Classification) -> Self {
        Self {
            bmi,
            classification,
            range: classification.range().to_owned(),
            narrative: classification.narrative().to_owned(),
        }
    }
}
