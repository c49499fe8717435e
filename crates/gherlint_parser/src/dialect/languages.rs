//! Keyword tables, one constant per language.
//!
//! Spellings follow the Cucumber `gherkin-languages` catalogue.

use super::Dialect;

pub const EN: Dialect = Dialect {
    code: "en",
    name: "English",
    native: "English",
    feature: &["Feature", "Business Need", "Ability"],
    background: &["Background"],
    scenario: &["Example", "Scenario"],
    scenario_outline: &["Scenario Outline", "Scenario Template"],
    examples: &["Examples", "Scenarios"],
    rule: &["Rule"],
    given: &["* ", "Given "],
    when: &["* ", "When "],
    then: &["* ", "Then "],
    and: &["* ", "And "],
    but: &["* ", "But "],
};

pub const FR: Dialect = Dialect {
    code: "fr",
    name: "French",
    native: "français",
    feature: &["Fonctionnalité"],
    background: &["Contexte"],
    scenario: &["Exemple", "Scénario"],
    scenario_outline: &["Plan du scénario", "Plan du Scénario"],
    examples: &["Exemples"],
    rule: &["Règle"],
    given: &[
        "* ",
        "Soit ",
        "Sachant que ",
        "Sachant qu'",
        "Sachant ",
        "Etant donné que ",
        "Etant donné qu'",
        "Etant donné ",
        "Etant donnée ",
        "Etant donnés ",
        "Etant données ",
        "Étant donné que ",
        "Étant donné qu'",
        "Étant donné ",
        "Étant donnée ",
        "Étant donnés ",
        "Étant données ",
    ],
    when: &["* ", "Quand ", "Lorsque ", "Lorsqu'"],
    then: &["* ", "Alors ", "Donc "],
    and: &["* ", "Et que ", "Et qu'", "Et "],
    but: &["* ", "Mais que ", "Mais qu'", "Mais "],
};

pub const DE: Dialect = Dialect {
    code: "de",
    name: "German",
    native: "Deutsch",
    feature: &["Funktionalität", "Funktion"],
    background: &["Grundlage", "Hintergrund", "Voraussetzungen", "Vorbedingungen"],
    scenario: &["Beispiel", "Szenario"],
    scenario_outline: &["Szenariogrundriss", "Szenarien"],
    examples: &["Beispiele"],
    rule: &["Rule", "Regel"],
    given: &["* ", "Angenommen ", "Gegeben sei ", "Gegeben seien "],
    when: &["* ", "Wenn "],
    then: &["* ", "Dann "],
    and: &["* ", "Und "],
    but: &["* ", "Aber "],
};

pub const ES: Dialect = Dialect {
    code: "es",
    name: "Spanish",
    native: "español",
    feature: &["Característica", "Necesidad del negocio", "Requisito"],
    background: &["Antecedentes"],
    scenario: &["Ejemplo", "Escenario"],
    scenario_outline: &["Esquema del escenario"],
    examples: &["Ejemplos"],
    rule: &["Regla", "Regla de negocio"],
    given: &["* ", "Dado ", "Dada ", "Dados ", "Dadas "],
    when: &["* ", "Cuando "],
    then: &["* ", "Entonces "],
    and: &["* ", "Y ", "E "],
    but: &["* ", "Pero "],
};

pub const IT: Dialect = Dialect {
    code: "it",
    name: "Italian",
    native: "italiano",
    feature: &["Funzionalità", "Esigenza di Business", "Abilità"],
    background: &["Contesto"],
    scenario: &["Esempio", "Scenario"],
    scenario_outline: &["Schema dello scenario"],
    examples: &["Esempi"],
    rule: &["Regola"],
    given: &["* ", "Dato ", "Data ", "Dati ", "Date "],
    when: &["* ", "Quando "],
    then: &["* ", "Allora "],
    and: &["* ", "E "],
    but: &["* ", "Ma "],
};

pub const PT: Dialect = Dialect {
    code: "pt",
    name: "Portuguese",
    native: "português",
    feature: &["Funcionalidade", "Característica", "Caracteristica"],
    background: &["Contexto", "Cenário de Fundo", "Cenario de Fundo", "Fundo"],
    scenario: &["Exemplo", "Cenário", "Cenario"],
    scenario_outline: &[
        "Esquema do Cenário",
        "Esquema do Cenario",
        "Delineação do Cenário",
        "Delineacao do Cenario",
    ],
    examples: &["Exemplos", "Cenários", "Cenarios"],
    rule: &["Regra"],
    given: &["* ", "Dado ", "Dada ", "Dados ", "Dadas "],
    when: &["* ", "Quando "],
    then: &["* ", "Então ", "Entao "],
    and: &["* ", "E "],
    but: &["* ", "Mas "],
};

pub const NL: Dialect = Dialect {
    code: "nl",
    name: "Dutch",
    native: "Nederlands",
    feature: &["Functionaliteit"],
    background: &["Achtergrond"],
    scenario: &["Voorbeeld", "Scenario"],
    scenario_outline: &["Abstract Scenario"],
    examples: &["Voorbeelden"],
    rule: &["Rule", "Regel"],
    given: &["* ", "Gegeven ", "Stel "],
    when: &["* ", "Als ", "Wanneer "],
    then: &["* ", "Dan "],
    and: &["* ", "En "],
    but: &["* ", "Maar "],
};

pub const PL: Dialect = Dialect {
    code: "pl",
    name: "Polish",
    native: "polski",
    feature: &["Właściwość", "Funkcja", "Aspekt", "Potrzeba biznesowa"],
    background: &["Założenia"],
    scenario: &["Przykład", "Scenariusz"],
    scenario_outline: &["Szablon scenariusza"],
    examples: &["Przykłady"],
    rule: &["Zasada", "Reguła"],
    given: &["* ", "Zakładając ", "Mając ", "Zakładając, że "],
    when: &["* ", "Jeżeli ", "Jeśli ", "Gdy ", "Kiedy "],
    then: &["* ", "Wtedy "],
    and: &["* ", "Oraz ", "I "],
    but: &["* ", "Ale "],
};

pub const RU: Dialect = Dialect {
    code: "ru",
    name: "Russian",
    native: "русский",
    feature: &["Функция", "Функциональность", "Функционал", "Свойство", "Фича"],
    background: &["Предыстория", "Контекст"],
    scenario: &["Пример", "Сценарий"],
    scenario_outline: &["Структура сценария", "Шаблон сценария"],
    examples: &["Примеры"],
    rule: &["Правило"],
    given: &["* ", "Допустим ", "Дано ", "Пусть "],
    when: &["* ", "Когда ", "Если "],
    then: &["* ", "То ", "Затем ", "Тогда "],
    and: &["* ", "И ", "К тому же ", "Также "],
    but: &["* ", "Но ", "А ", "Иначе "],
};

pub const JA: Dialect = Dialect {
    code: "ja",
    name: "Japanese",
    native: "日本語",
    feature: &["フィーチャ", "機能"],
    background: &["背景"],
    scenario: &["シナリオ"],
    scenario_outline: &[
        "シナリオアウトライン",
        "シナリオテンプレート",
        "テンプレ",
        "シナリオテンプレ",
    ],
    examples: &["例", "サンプル"],
    rule: &["ルール"],
    given: &["* ", "前提"],
    when: &["* ", "もし"],
    then: &["* ", "ならば"],
    and: &["* ", "且つ", "かつ"],
    but: &["* ", "然し", "しかし", "但し", "ただし"],
};

pub const ZH_CN: Dialect = Dialect {
    code: "zh-CN",
    name: "Chinese simplified",
    native: "简体中文",
    feature: &["功能"],
    background: &["背景"],
    scenario: &["场景", "剧本"],
    scenario_outline: &["场景大纲", "剧本大纲"],
    examples: &["例子"],
    rule: &["Rule", "规则"],
    given: &["* ", "假如", "假设", "假定"],
    when: &["* ", "当"],
    then: &["* ", "那么"],
    and: &["* ", "而且", "并且", "同时"],
    but: &["* ", "但是"],
};

pub const AF: Dialect = Dialect {
    code: "af",
    name: "Afrikaans",
    native: "Afrikaans",
    feature: &["Funksie", "Besigheid Behoefte", "Vermoë"],
    background: &["Agtergrond"],
    scenario: &["Voorbeeld", "Situasie"],
    scenario_outline: &["Situasie Uiteensetting"],
    examples: &["Voorbeelde"],
    rule: &["Regel"],
    given: &["* ", "Gegewe "],
    when: &["* ", "Wanneer "],
    then: &["* ", "Dan "],
    and: &["* ", "En "],
    but: &["* ", "Maar "],
};

pub const AM: Dialect = Dialect {
    code: "am",
    name: "Armenian",
    native: "հայերեն",
    feature: &["Functionality", "Հատկություն"],
    background: &["Կոնտեքստ"],
    scenario: &["Օրինակ", "Սցենար"],
    scenario_outline: &["Սցենարի կառուցվացքը"],
    examples: &["Օրինակներ"],
    rule: &["Rule"],
    given: &["* ", "Դիցուք ", "Հաշվի առնելով "],
    when: &["* ", "Եթե ", "Երբ "],
    then: &["* ", "Ապա "],
    and: &["* ", "Եվ "],
    but: &["* ", "Բայց "],
};

pub const AN: Dialect = Dialect {
    code: "an",
    name: "Aragonese",
    native: "Aragonés",
    feature: &["Caracteristica"],
    background: &["Antecedents"],
    scenario: &["Eixemplo", "Caso"],
    scenario_outline: &["Esquema del caso"],
    examples: &["Eixemplos"],
    rule: &["Rule"],
    given: &["* ", "Dau ", "Dada ", "Daus ", "Dadas "],
    when: &["* ", "Cuan "],
    then: &["* ", "Alavez ", "Allora ", "Antonces "],
    and: &["* ", "Y ", "E "],
    but: &["* ", "Pero "],
};

pub const AR: Dialect = Dialect {
    code: "ar",
    name: "Arabic",
    native: "العربية",
    feature: &["خاصية"],
    background: &["الخلفية"],
    scenario: &["مثال", "سيناريو"],
    scenario_outline: &["سيناريو مخطط"],
    examples: &["امثلة"],
    rule: &["Rule"],
    given: &["* ", "بفرض "],
    when: &["* ", "متى ", "عندما "],
    then: &["* ", "اذاً ", "ثم "],
    and: &["* ", "و "],
    but: &["* ", "لكن "],
};

pub const AST: Dialect = Dialect {
    code: "ast",
    name: "Asturian",
    native: "asturianu",
    feature: &["Carauterística"],
    background: &["Antecedentes"],
    scenario: &["Exemplo", "Casu"],
    scenario_outline: &["Esbozu del casu"],
    examples: &["Exemplos"],
    rule: &["Rule"],
    given: &["* ", "Dáu ", "Dada ", "Daos ", "Daes "],
    when: &["* ", "Cuando "],
    then: &["* ", "Entós "],
    and: &["* ", "Y ", "Ya "],
    but: &["* ", "Peru "],
};

pub const AZ: Dialect = Dialect {
    code: "az",
    name: "Azerbaijani",
    native: "Azərbaycanca",
    feature: &["Özəllik"],
    background: &["Keçmiş", "Kontekst"],
    scenario: &["Nümunə", "Ssenari"],
    scenario_outline: &["Ssenarinin strukturu"],
    examples: &["Nümunələr"],
    rule: &["Rule"],
    given: &["* ", "Tutaq ki ", "Verilir "],
    when: &["* ", "Əgər ", "Nə vaxt ki "],
    then: &["* ", "O halda "],
    and: &["* ", "Və ", "Həm "],
    but: &["* ", "Amma ", "Ancaq "],
};

pub const BE: Dialect = Dialect {
    code: "be",
    name: "Belarusian",
    native: "Беларуская",
    feature: &["Функцыянальнасць", "Фіча"],
    background: &["Кантэкст"],
    scenario: &["Сцэнарый", "Cцэнар"],
    scenario_outline: &["Шаблон сцэнарыя", "Узор сцэнара"],
    examples: &["Прыклады"],
    rule: &["Правілы"],
    given: &["* ", "Няхай ", "Дадзена "],
    when: &["* ", "Калі "],
    then: &["* ", "Тады "],
    and: &["* ", "I ", "Ды ", "Таксама "],
    but: &["* ", "Але ", "Інакш "],
};

pub const BG: Dialect = Dialect {
    code: "bg",
    name: "Bulgarian",
    native: "български",
    feature: &["Функционалност"],
    background: &["Предистория"],
    scenario: &["Пример", "Сценарий"],
    scenario_outline: &["Рамка на сценарий"],
    examples: &["Примери"],
    rule: &["Правило"],
    given: &["* ", "Дадено "],
    when: &["* ", "Когато "],
    then: &["* ", "То "],
    and: &["* ", "И "],
    but: &["* ", "Но "],
};

pub const BM: Dialect = Dialect {
    code: "bm",
    name: "Malay",
    native: "Bahasa Melayu",
    feature: &["Fungsi"],
    background: &["Latar Belakang"],
    scenario: &["Senario", "Situasi", "Keadaan"],
    scenario_outline: &[
        "Kerangka Senario",
        "Kerangka Situasi",
        "Kerangka Keadaan",
        "Garis Panduan Senario",
    ],
    examples: &["Contoh"],
    rule: &["Rule"],
    given: &["* ", "Diberi ", "Bagi "],
    when: &["* ", "Apabila "],
    then: &["* ", "Maka ", "Kemudian "],
    and: &["* ", "Dan "],
    but: &["* ", "Tetapi ", "Tapi "],
};

pub const BS: Dialect = Dialect {
    code: "bs",
    name: "Bosnian",
    native: "Bosanski",
    feature: &["Karakteristika"],
    background: &["Pozadina"],
    scenario: &["Primjer", "Scenariju", "Scenario"],
    scenario_outline: &["Scenariju-obris", "Scenario-outline"],
    examples: &["Primjeri"],
    rule: &["Rule"],
    given: &["* ", "Dato "],
    when: &["* ", "Kada "],
    then: &["* ", "Zatim "],
    and: &["* ", "I ", "A "],
    but: &["* ", "Ali "],
};

pub const CA: Dialect = Dialect {
    code: "ca",
    name: "Catalan",
    native: "català",
    feature: &["Característica", "Funcionalitat"],
    background: &["Rerefons", "Antecedents"],
    scenario: &["Exemple", "Escenari"],
    scenario_outline: &["Esquema de l'escenari"],
    examples: &["Exemples"],
    rule: &["Rule"],
    given: &["* ", "Donat ", "Donada ", "Atès ", "Atesa "],
    when: &["* ", "Quan "],
    then: &["* ", "Aleshores ", "Cal "],
    and: &["* ", "I "],
    but: &["* ", "Però "],
};

pub const CS: Dialect = Dialect {
    code: "cs",
    name: "Czech",
    native: "Česky",
    feature: &["Požadavek"],
    background: &["Pozadí", "Kontext"],
    scenario: &["Příklad", "Scénář"],
    scenario_outline: &["Náčrt Scénáře", "Osnova scénáře"],
    examples: &["Příklady"],
    rule: &["Pravidlo"],
    given: &["* ", "Pokud ", "Za předpokladu "],
    when: &["* ", "Když "],
    then: &["* ", "Pak "],
    and: &["* ", "A také ", "A "],
    but: &["* ", "Ale "],
};

pub const CY_GB: Dialect = Dialect {
    code: "cy-GB",
    name: "Welsh",
    native: "Cymraeg",
    feature: &["Arwedd"],
    background: &["Cefndir"],
    scenario: &["Enghraifft", "Scenario"],
    scenario_outline: &["Scenario Amlinellol"],
    examples: &["Enghreifftiau"],
    rule: &["Rule"],
    given: &["* ", "Anrhegedig a "],
    when: &["* ", "Pryd "],
    then: &["* ", "Yna "],
    and: &["* ", "A "],
    but: &["* ", "Ond "],
};

pub const DA: Dialect = Dialect {
    code: "da",
    name: "Danish",
    native: "dansk",
    feature: &["Egenskab"],
    background: &["Baggrund"],
    scenario: &["Eksempel", "Scenarie"],
    scenario_outline: &["Abstrakt Scenario"],
    examples: &["Eksempler"],
    rule: &["Regel"],
    given: &["* ", "Givet "],
    when: &["* ", "Når "],
    then: &["* ", "Så "],
    and: &["* ", "Og "],
    but: &["* ", "Men "],
};

pub const EL: Dialect = Dialect {
    code: "el",
    name: "Greek",
    native: "Ελληνικά",
    feature: &["Δυνατότητα", "Λειτουργία"],
    background: &["Υπόβαθρο"],
    scenario: &["Παράδειγμα", "Σενάριο"],
    scenario_outline: &["Περιγραφή Σεναρίου", "Περίγραμμα Σεναρίου"],
    examples: &["Παραδείγματα", "Σενάρια"],
    rule: &["Rule"],
    given: &["* ", "Δεδομένου "],
    when: &["* ", "Όταν "],
    then: &["* ", "Τότε "],
    and: &["* ", "Και "],
    but: &["* ", "Αλλά "],
};

pub const EM: Dialect = Dialect {
    code: "em",
    name: "Emoji",
    native: "😀",
    feature: &["📚"],
    background: &["💤"],
    scenario: &["🥒", "📕"],
    scenario_outline: &["📖"],
    examples: &["📓"],
    rule: &["Rule"],
    given: &["* ", "😐"],
    when: &["* ", "🎬"],
    then: &["* ", "🙏"],
    and: &["* ", "😂"],
    but: &["* ", "😔"],
};

pub const EN_SCOUSE: Dialect = Dialect {
    code: "en-Scouse",
    name: "Scouse",
    native: "Scouse",
    feature: &["Feature"],
    background: &["Dis is what went down"],
    scenario: &["The thing of it is"],
    scenario_outline: &["Wharrimean is"],
    examples: &["Examples"],
    rule: &["Rule"],
    given: &["* ", "Givun ", "Youse know when youse got "],
    when: &["* ", "Wun ", "Youse know like when "],
    then: &["* ", "Dun ", "Den youse gotta "],
    and: &["* ", "An "],
    but: &["* ", "Buh "],
};

pub const EN_AU: Dialect = Dialect {
    code: "en-au",
    name: "Australian",
    native: "Australian",
    feature: &["Pretty much"],
    background: &["First off"],
    scenario: &["Awww, look mate"],
    scenario_outline: &["Reckon it's like", "Sink into it"],
    examples: &["You'll wanna"],
    rule: &["Rule"],
    given: &["* ", "Y'know "],
    when: &["* ", "It's just unbelievable "],
    then: &["* ", "But at the end of the day I reckon "],
    and: &["* ", "Too right "],
    but: &["* ", "Yeah nah "],
};

pub const EN_LOL: Dialect = Dialect {
    code: "en-lol",
    name: "LOLCAT",
    native: "LOLCAT",
    feature: &["OH HAI"],
    background: &["B4"],
    scenario: &["MISHUN"],
    scenario_outline: &["MISHUN SRSLY"],
    examples: &["EXAMPLZ"],
    rule: &["Rule"],
    given: &["* ", "I CAN HAZ "],
    when: &["* ", "WEN "],
    then: &["* ", "DEN "],
    and: &["* ", "AN "],
    but: &["* ", "BUT "],
};

pub const EN_PIRATE: Dialect = Dialect {
    code: "en-pirate",
    name: "Pirate",
    native: "Pirate",
    feature: &["Ahoy matey!"],
    background: &["Yo-ho-ho"],
    scenario: &["Heave to"],
    scenario_outline: &["Shiver me timbers"],
    examples: &["Dead men tell no tales"],
    rule: &["Rule"],
    given: &["* ", "Gangway! "],
    when: &["* ", "Blimey! "],
    then: &["* ", "Let go and haul "],
    and: &["* ", "Aye "],
    but: &["* ", "Avast! "],
};

pub const EO: Dialect = Dialect {
    code: "eo",
    name: "Esperanto",
    native: "Esperanto",
    feature: &["Trajto"],
    background: &["Fono"],
    scenario: &["Ekzemplo", "Scenaro", "Kazo"],
    scenario_outline: &["Konturo de la scenaro", "Skizo", "Kazo-skizo"],
    examples: &["Ekzemploj"],
    rule: &["Regulo"],
    given: &["* ", "Donitaĵo ", "Komence "],
    when: &["* ", "Se "],
    then: &["* ", "Do "],
    and: &["* ", "Kaj "],
    but: &["* ", "Sed "],
};

pub const ET: Dialect = Dialect {
    code: "et",
    name: "Estonian",
    native: "eesti keel",
    feature: &["Omadus"],
    background: &["Taust"],
    scenario: &["Juhtum", "Stsenaarium"],
    scenario_outline: &["Raamjuhtum", "Raamstsenaarium"],
    examples: &["Juhtumid"],
    rule: &["Reegel"],
    given: &["* ", "Eeldades "],
    when: &["* ", "Kui "],
    then: &["* ", "Siis "],
    and: &["* ", "Ja "],
    but: &["* ", "Kuid "],
};

pub const FA: Dialect = Dialect {
    code: "fa",
    name: "Persian",
    native: "فارسی",
    feature: &["وِیژگی"],
    background: &["زمینه"],
    scenario: &["مثال", "سناریو"],
    scenario_outline: &["الگوی سناریو"],
    examples: &["نمونه ها"],
    rule: &["Rule"],
    given: &["* ", "با فرض "],
    when: &["* ", "هنگامی "],
    then: &["* ", "آنگاه "],
    and: &["* ", "و "],
    but: &["* ", "اما "],
};

pub const FI: Dialect = Dialect {
    code: "fi",
    name: "Finnish",
    native: "suomi",
    feature: &["Ominaisuus"],
    background: &["Tausta"],
    scenario: &["Tapaus"],
    scenario_outline: &["Tapausaihio"],
    examples: &["Tapaukset"],
    rule: &["Rule"],
    given: &["* ", "Oletetaan "],
    when: &["* ", "Kun "],
    then: &["* ", "Niin "],
    and: &["* ", "Ja "],
    but: &["* ", "Mutta "],
};

pub const GJ: Dialect = Dialect {
    code: "gj",
    name: "Gujarati",
    native: "ગુજરાતી",
    feature: &["લક્ષણ", "વ્યાપાર જરૂર", "ક્ષમતા"],
    background: &["બેકગ્રાઉન્ડ"],
    scenario: &["ઉદાહરણ", "સ્થિતિ"],
    scenario_outline: &["પરિદ્દશ્ય રૂપરેખા", "પરિદ્દશ્ય ઢાંચો"],
    examples: &["ઉદાહરણો"],
    rule: &["Rule"],
    given: &["* ", "આપેલ છે "],
    when: &["* ", "ક્યારે "],
    then: &["* ", "પછી "],
    and: &["* ", "અને "],
    but: &["* ", "પણ "],
};

pub const GL: Dialect = Dialect {
    code: "gl",
    name: "Galician",
    native: "galego",
    feature: &["Característica"],
    background: &["Contexto"],
    scenario: &["Exemplo", "Escenario"],
    scenario_outline: &["Esbozo do escenario"],
    examples: &["Exemplos"],
    rule: &["Rule"],
    given: &["* ", "Dado ", "Dada ", "Dados ", "Dadas "],
    when: &["* ", "Cando "],
    then: &["* ", "Então ", "Logo "],
    and: &["* ", "E "],
    but: &["* ", "Mais ", "Pero "],
};

pub const HE: Dialect = Dialect {
    code: "he",
    name: "Hebrew",
    native: "עברית",
    feature: &["תכונה"],
    background: &["רקע"],
    scenario: &["דוגמא", "תרחיש"],
    scenario_outline: &["תבנית תרחיש"],
    examples: &["דוגמאות"],
    rule: &["כלל"],
    given: &["* ", "בהינתן "],
    when: &["* ", "כאשר "],
    then: &["* ", "אז ", "אזי "],
    and: &["* ", "וגם "],
    but: &["* ", "אבל "],
};

pub const HI: Dialect = Dialect {
    code: "hi",
    name: "Hindi",
    native: "हिंदी",
    feature: &["रूप लेख"],
    background: &["पृष्ठभूमि"],
    scenario: &["परिदृश्य"],
    scenario_outline: &["परिदृश्य रूपरेखा"],
    examples: &["उदाहरण"],
    rule: &["नियम"],
    given: &["* ", "अगर ", "यदि ", "चूंकि "],
    when: &["* ", "जब ", "कदा "],
    then: &["* ", "तब ", "तदा "],
    and: &["* ", "और ", "तथा "],
    but: &["* ", "पर ", "परन्तु ", "किन्तु "],
};

pub const HR: Dialect = Dialect {
    code: "hr",
    name: "Croatian",
    native: "hrvatski",
    feature: &["Osobina", "Mogućnost", "Mogucnost"],
    background: &["Pozadina"],
    scenario: &["Primjer", "Scenarij"],
    scenario_outline: &["Skica", "Koncept"],
    examples: &["Primjeri", "Scenariji"],
    rule: &["Rule"],
    given: &["* ", "Zadan ", "Zadani ", "Zadano ", "Ukoliko "],
    when: &["* ", "Kada ", "Kad "],
    then: &["* ", "Onda "],
    and: &["* ", "I "],
    but: &["* ", "Ali "],
};

pub const HT: Dialect = Dialect {
    code: "ht",
    name: "Creole",
    native: "kreyòl",
    feature: &["Karakteristik", "Mak", "Fonksyonalite"],
    background: &["Kontèks", "Istorik"],
    scenario: &["Senaryo"],
    scenario_outline: &[
        "Plan senaryo",
        "Plan Senaryo",
        "Senaryo deskripsyon",
        "Senaryo Deskripsyon",
        "Dyagram senaryo",
        "Dyagram Senaryo",
    ],
    examples: &["Egzanp"],
    rule: &["Rule"],
    given: &["* ", "Sipoze ", "Sipoze ke ", "Sipoze Ke "],
    when: &["* ", "Lè ", "Le "],
    then: &["* ", "Lè sa a ", "Le sa a "],
    and: &["* ", "Ak ", "Epi ", "E "],
    but: &["* ", "Men "],
};

pub const HU: Dialect = Dialect {
    code: "hu",
    name: "Hungarian",
    native: "magyar",
    feature: &["Jellemző"],
    background: &["Háttér"],
    scenario: &["Példa", "Forgatókönyv"],
    scenario_outline: &["Forgatókönyv vázlat"],
    examples: &["Példák"],
    rule: &["Szabály"],
    given: &["* ", "Amennyiben ", "Adott "],
    when: &["* ", "Majd ", "Ha ", "Amikor "],
    then: &["* ", "Akkor "],
    and: &["* ", "És "],
    but: &["* ", "De "],
};

pub const ID: Dialect = Dialect {
    code: "id",
    name: "Indonesian",
    native: "Bahasa Indonesia",
    feature: &["Fitur"],
    background: &["Dasar", "Latar Belakang"],
    scenario: &["Skenario"],
    scenario_outline: &["Skenario konsep", "Garis-Besar Skenario"],
    examples: &["Contoh", "Misal"],
    rule: &["Rule", "Aturan"],
    given: &["* ", "Dengan ", "Diketahui ", "Diasumsikan ", "Bila ", "Jika "],
    when: &["* ", "Ketika "],
    then: &["* ", "Maka ", "Kemudian "],
    and: &["* ", "Dan "],
    but: &["* ", "Tapi ", "Tetapi "],
};

pub const IS: Dialect = Dialect {
    code: "is",
    name: "Icelandic",
    native: "Íslenska",
    feature: &["Eiginleiki"],
    background: &["Bakgrunnur"],
    scenario: &["Atburðarás"],
    scenario_outline: &["Lýsing Atburðarásar", "Lýsing Dæma"],
    examples: &["Dæmi", "Atburðarásir"],
    rule: &["Rule"],
    given: &["* ", "Ef "],
    when: &["* ", "Þegar "],
    then: &["* ", "Þá "],
    and: &["* ", "Og "],
    but: &["* ", "En "],
};

pub const JV: Dialect = Dialect {
    code: "jv",
    name: "Javanese",
    native: "Basa Jawa",
    feature: &["Fitur"],
    background: &["Dasar"],
    scenario: &["Skenario"],
    scenario_outline: &["Konsep skenario"],
    examples: &["Conto", "Contone"],
    rule: &["Rule"],
    given: &["* ", "Nalika ", "Nalikaning "],
    when: &["* ", "Manawa ", "Menawa "],
    then: &["* ", "Njuk ", "Banjur "],
    and: &["* ", "Lan "],
    but: &["* ", "Tapi ", "Nanging ", "Ananging "],
};

pub const KA: Dialect = Dialect {
    code: "ka",
    name: "Georgian",
    native: "ქართული",
    feature: &["თვისება", "მოთხოვნა"],
    background: &["კონტექსტი"],
    scenario: &["მაგალითად", "მაგალითი", "მაგ", "სცენარი"],
    scenario_outline: &["სცენარის ნიმუში", "სცენარის შაბლონი", "ნიმუში", "შაბლონი"],
    examples: &["მაგალითები"],
    rule: &["წესი"],
    given: &["* ", "მოცემული ", "მოცემულია ", "ვთქვათ "],
    when: &["* ", "როდესაც ", "როცა ", "როგორც კი ", "თუ "],
    then: &["* ", "მაშინ "],
    and: &["* ", "და ", "ასევე "],
    but: &["* ", "მაგრამ ", "თუმცა "],
};

pub const KN: Dialect = Dialect {
    code: "kn",
    name: "Kannada",
    native: "ಕನ್ನಡ",
    feature: &["ಹೆಚ್ಚಳ"],
    background: &["ಹಿನ್ನೆಲೆ"],
    scenario: &["ಉದಾಹರಣೆ", "ಕಥಾಸಾರಾಂಶ"],
    scenario_outline: &["ವಿವರಣೆ"],
    examples: &["ಉದಾಹರಣೆಗಳು"],
    rule: &["Rule"],
    given: &["* ", "ನೀಡಿದ "],
    when: &["* ", "ಸ್ಥಿತಿಯನ್ನು "],
    then: &["* ", "ನಂತರ "],
    and: &["* ", "ಮತ್ತು "],
    but: &["* ", "ಆದರೆ "],
};

pub const KO: Dialect = Dialect {
    code: "ko",
    name: "Korean",
    native: "한국어",
    feature: &["기능"],
    background: &["배경"],
    scenario: &["시나리오"],
    scenario_outline: &["시나리오 개요"],
    examples: &["예"],
    rule: &["Rule"],
    given: &["* ", "조건", "먼저"],
    when: &["* ", "만일", "만약"],
    then: &["* ", "그러면"],
    and: &["* ", "그리고"],
    but: &["* ", "하지만", "단"],
};

pub const LT: Dialect = Dialect {
    code: "lt",
    name: "Lithuanian",
    native: "lietuvių kalba",
    feature: &["Savybė"],
    background: &["Kontekstas"],
    scenario: &["Pavyzdys", "Scenarijus"],
    scenario_outline: &["Scenarijaus šablonas"],
    examples: &["Pavyzdžiai", "Scenarijai", "Variantai"],
    rule: &["Rule"],
    given: &["* ", "Duota "],
    when: &["* ", "Kai "],
    then: &["* ", "Tada "],
    and: &["* ", "Ir "],
    but: &["* ", "Bet "],
};

pub const LU: Dialect = Dialect {
    code: "lu",
    name: "Luxemburgish",
    native: "Lëtzebuergesch",
    feature: &["Funktionalitéit"],
    background: &["Hannergrond"],
    scenario: &["Beispill", "Szenario"],
    scenario_outline: &["Plang vum Szenario"],
    examples: &["Beispiller"],
    rule: &["Rule"],
    given: &["* ", "ugeholl "],
    when: &["* ", "wann "],
    then: &["* ", "dann "],
    and: &["* ", "an ", "a "],
    but: &["* ", "awer ", "mä "],
};

pub const LV: Dialect = Dialect {
    code: "lv",
    name: "Latvian",
    native: "latviešu",
    feature: &["Funkcionalitāte", "Fīča"],
    background: &["Konteksts", "Situācija"],
    scenario: &["Piemērs", "Scenārijs"],
    scenario_outline: &["Scenārijs pēc parauga"],
    examples: &["Piemēri", "Paraugs"],
    rule: &["Rule"],
    given: &["* ", "Kad "],
    when: &["* ", "Ja "],
    then: &["* ", "Tad "],
    and: &["* ", "Un "],
    but: &["* ", "Bet "],
};

pub const MK_CYRL: Dialect = Dialect {
    code: "mk-Cyrl",
    name: "Macedonian",
    native: "Македонски",
    feature: &["Функционалност", "Бизнис потреба", "Можност"],
    background: &["Контекст", "Содржина"],
    scenario: &["Пример", "Сценарио", "На пример"],
    scenario_outline: &["Преглед на сценарија", "Скица", "Концепт"],
    examples: &["Примери", "Сценарија"],
    rule: &["Rule"],
    given: &["* ", "Дадено ", "Дадена "],
    when: &["* ", "Кога "],
    then: &["* ", "Тогаш "],
    and: &["* ", "И "],
    but: &["* ", "Но "],
};

pub const MK_LATN: Dialect = Dialect {
    code: "mk-Latn",
    name: "Macedonian (Latin)",
    native: "Makedonski (Latinica)",
    feature: &["Funkcionalnost", "Biznis potreba", "Mozhnost"],
    background: &["Kontekst", "Sodrzhina"],
    scenario: &["Scenario", "Na primer"],
    scenario_outline: &["Pregled na scenarija", "Skica", "Koncept"],
    examples: &["Primeri", "Scenaria"],
    rule: &["Rule"],
    given: &["* ", "Dadeno ", "Dadena "],
    when: &["* ", "Koga "],
    then: &["* ", "Togash "],
    and: &["* ", "I "],
    but: &["* ", "No "],
};

pub const MN: Dialect = Dialect {
    code: "mn",
    name: "Mongolian",
    native: "монгол",
    feature: &["Функц", "Функционал"],
    background: &["Агуулга"],
    scenario: &["Сценар"],
    scenario_outline: &["Сценарын төлөвлөгөө"],
    examples: &["Тухайлбал"],
    rule: &["Rule"],
    given: &["* ", "Өгөгдсөн нь ", "Анх "],
    when: &["* ", "Хэрэв "],
    then: &["* ", "Тэгэхэд ", "Үүний дараа "],
    and: &["* ", "Мөн ", "Тэгээд "],
    but: &["* ", "Гагцхүү ", "Тэгэхдээ "],
};

pub const MR: Dialect = Dialect {
    code: "mr",
    name: "Marathi",
    native: "मराठी",
    feature: &["वैशिष्ट्य", "सुविधा"],
    background: &["पार्श्वभूमी"],
    scenario: &["परिदृश्य"],
    scenario_outline: &["परिदृश्य रूपरेखा"],
    examples: &["उदाहरण"],
    rule: &["नियम"],
    given: &["* ", "जर ", "दिलेल्या प्रमाणे "],
    when: &["* ", "जेव्हा "],
    then: &["* ", "मग ", "तेव्हा "],
    and: &["* ", "आणि ", "तसेच "],
    but: &["* ", "पण ", "परंतु "],
};

pub const NE: Dialect = Dialect {
    code: "ne",
    name: "Nepali",
    native: "नेपाली",
    feature: &["सुविधा", "विशेषता"],
    background: &["पृष्ठभूमी"],
    scenario: &["परिदृश्य"],
    scenario_outline: &["परिदृश्य रूपरेखा"],
    examples: &["उदाहरण", "उदाहरणहरु"],
    rule: &["नियम"],
    given: &["* ", "दिइएको ", "दिएको ", "यदि "],
    when: &["* ", "जब "],
    then: &["* ", "त्यसपछि ", "अनी "],
    and: &["* ", "र ", "अनि "],
    but: &["* ", "तर "],
};

pub const NO: Dialect = Dialect {
    code: "no",
    name: "Norwegian",
    native: "norsk",
    feature: &["Egenskap"],
    background: &["Bakgrunn"],
    scenario: &["Eksempel", "Scenario"],
    scenario_outline: &["Scenariomal", "Abstrakt Scenario"],
    examples: &["Eksempler"],
    rule: &["Regel"],
    given: &["* ", "Gitt "],
    when: &["* ", "Når "],
    then: &["* ", "Så "],
    and: &["* ", "Og "],
    but: &["* ", "Men "],
};

pub const PA: Dialect = Dialect {
    code: "pa",
    name: "Panjabi",
    native: "ਪੰਜਾਬੀ",
    feature: &["ਖਾਸੀਅਤ", "ਮੁਹਾਂਦਰਾ", "ਨਕਸ਼ ਨੁਹਾਰ"],
    background: &["ਪਿਛੋਕੜ"],
    scenario: &["ਉਦਾਹਰਨ", "ਪਟਕਥਾ"],
    scenario_outline: &["ਪਟਕਥਾ ਢਾਂਚਾ", "ਪਟਕਥਾ ਰੂਪ ਰੇਖਾ"],
    examples: &["ਉਦਾਹਰਨਾਂ"],
    rule: &["Rule"],
    given: &["* ", "ਜੇਕਰ ", "ਜਿਵੇਂ ਕਿ "],
    when: &["* ", "ਜਦੋਂ "],
    then: &["* ", "ਤਦ "],
    and: &["* ", "ਅਤੇ "],
    but: &["* ", "ਪਰ "],
};

pub const RO: Dialect = Dialect {
    code: "ro",
    name: "Romanian",
    native: "română",
    feature: &["Functionalitate", "Funcționalitate", "Funcţionalitate"],
    background: &["Context"],
    scenario: &["Exemplu", "Scenariu"],
    scenario_outline: &["Structura scenariu", "Structură scenariu"],
    examples: &["Exemple"],
    rule: &["Rule"],
    given: &[
        "* ",
        "Date fiind ",
        "Dat fiind ",
        "Dată fiind ",
        "Dati fiind ",
        "Dați fiind ",
        "Daţi fiind ",
    ],
    when: &["* ", "Cand ", "Când "],
    then: &["* ", "Atunci "],
    and: &["* ", "Si ", "Și ", "Şi "],
    but: &["* ", "Dar "],
};

pub const SK: Dialect = Dialect {
    code: "sk",
    name: "Slovak",
    native: "Slovensky",
    feature: &["Požiadavka", "Funkcia", "Vlastnosť"],
    background: &["Pozadie"],
    scenario: &["Príklad", "Scenár"],
    scenario_outline: &["Náčrt Scenáru", "Náčrt Scenára", "Osnova Scenára"],
    examples: &["Príklady"],
    rule: &["Rule"],
    given: &["* ", "Pokiaľ ", "Za predpokladu "],
    when: &["* ", "Keď ", "Ak "],
    then: &["* ", "Tak ", "Potom "],
    and: &["* ", "A ", "A tiež ", "A taktiež ", "A zároveň "],
    but: &["* ", "Ale "],
};

pub const SL: Dialect = Dialect {
    code: "sl",
    name: "Slovenian",
    native: "Slovenski",
    feature: &["Funkcionalnost", "Funkcija", "Možnosti", "Moznosti", "Lastnost", "Značilnost"],
    background: &["Kontekst", "Osnova", "Ozadje"],
    scenario: &["Primer", "Scenarij"],
    scenario_outline: &["Struktura scenarija", "Skica", "Koncept", "Oris scenarija", "Osnutek"],
    examples: &["Primeri", "Scenariji"],
    rule: &["Rule"],
    given: &["* ", "Dano ", "Podano ", "Zaradi ", "Privzeto "],
    when: &["* ", "Ko ", "Ce ", "Če ", "Kadar "],
    then: &["* ", "Nato ", "Potem ", "Takrat "],
    and: &["* ", "In ", "Ter "],
    but: &["* ", "Toda ", "Ampak ", "Vendar "],
};

pub const SR_CYRL: Dialect = Dialect {
    code: "sr-Cyrl",
    name: "Serbian",
    native: "Српски",
    feature: &["Функционалност", "Могућност", "Особина"],
    background: &["Контекст", "Основа", "Позадина"],
    scenario: &["Сценарио", "Пример"],
    scenario_outline: &["Структура сценарија", "Скица", "Концепт"],
    examples: &["Примери", "Сценарији"],
    rule: &["Правило"],
    given: &["* ", "За дато ", "За дате ", "За дати "],
    when: &["* ", "Када ", "Кад "],
    then: &["* ", "Онда "],
    and: &["* ", "И "],
    but: &["* ", "Али "],
};

pub const SR_LATN: Dialect = Dialect {
    code: "sr-Latn",
    name: "Serbian (Latin)",
    native: "Srpski (Latinica)",
    feature: &["Funkcionalnost", "Mogućnost", "Mogucnost", "Osobina"],
    background: &["Kontekst", "Osnova", "Pozadina"],
    scenario: &["Scenario", "Primer"],
    scenario_outline: &["Struktura scenarija", "Skica", "Koncept"],
    examples: &["Primeri", "Scenariji"],
    rule: &["Pravilo"],
    given: &["* ", "Za dato ", "Za date ", "Za dati "],
    when: &["* ", "Kada ", "Kad "],
    then: &["* ", "Onda "],
    and: &["* ", "I "],
    but: &["* ", "Ali "],
};

pub const SV: Dialect = Dialect {
    code: "sv",
    name: "Swedish",
    native: "Svenska",
    feature: &["Egenskap"],
    background: &["Bakgrund"],
    scenario: &["Scenario"],
    scenario_outline: &["Abstrakt Scenario", "Scenariomall"],
    examples: &["Exempel"],
    rule: &["Regel"],
    given: &["* ", "Givet "],
    when: &["* ", "När "],
    then: &["* ", "Så "],
    and: &["* ", "Och "],
    but: &["* ", "Men "],
};

pub const TA: Dialect = Dialect {
    code: "ta",
    name: "Tamil",
    native: "தமிழ்",
    feature: &["அம்சம்", "வணிக தேவை", "திறன்"],
    background: &["பின்னணி"],
    scenario: &["உதாரணமாக", "காட்சி"],
    scenario_outline: &["காட்சி சுருக்கம்", "காட்சி வார்ப்புரு"],
    examples: &["எடுத்துக்காட்டுகள்", "காட்சிகள்", "நிலைமைகளில்"],
    rule: &["Rule"],
    given: &["* ", "கொடுக்கப்பட்ட "],
    when: &["* ", "எப்போது "],
    then: &["* ", "அப்பொழுது "],
    and: &["* ", "மேலும் ", "மற்றும் "],
    but: &["* ", "ஆனால் "],
};

pub const TE: Dialect = Dialect {
    code: "te",
    name: "Telugu",
    native: "తెలుగు",
    feature: &["గుణము"],
    background: &["నేపథ్యం"],
    scenario: &["ఉదాహరణ", "సన్నివేశం"],
    scenario_outline: &["కథనం"],
    examples: &["ఉదాహరణలు"],
    rule: &["Rule"],
    given: &["* ", "చెప్పబడినది "],
    when: &["* ", "ఈ పరిస్థితిలో "],
    then: &["* ", "అప్పుడు "],
    and: &["* ", "మరియు "],
    but: &["* ", "కాని "],
};

pub const TH: Dialect = Dialect {
    code: "th",
    name: "Thai",
    native: "ไทย",
    feature: &["โครงหลัก", "ความต้องการทางธุรกิจ", "ความสามารถ"],
    background: &["แนวคิด"],
    scenario: &["เหตุการณ์"],
    scenario_outline: &["สรุปเหตุการณ์", "โครงสร้างของเหตุการณ์"],
    examples: &["ชุดของตัวอย่าง", "ชุดของเหตุการณ์"],
    rule: &["Rule"],
    given: &["* ", "กำหนดให้ "],
    when: &["* ", "เมื่อ "],
    then: &["* ", "ดังนั้น "],
    and: &["* ", "และ "],
    but: &["* ", "แต่ "],
};

pub const TLH: Dialect = Dialect {
    code: "tlh",
    name: "Klingon",
    native: "tlhIngan",
    feature: &["Qap", "Qu'meH 'ut", "perbogh", "poQbogh malja'", "laH"],
    background: &["mo'"],
    scenario: &["lut"],
    scenario_outline: &["lut chovnatlh"],
    examples: &["ghantoH", "lutmey"],
    rule: &["Rule"],
    given: &["* ", "ghu' noblu' ", "DaH ghu' bejlu' "],
    when: &["* ", "qaSDI' "],
    then: &["* ", "vaj "],
    and: &["* ", "'ej ", "latlh "],
    but: &["* ", "'ach ", "'a "],
};

pub const TR: Dialect = Dialect {
    code: "tr",
    name: "Turkish",
    native: "Türkçe",
    feature: &["Özellik"],
    background: &["Geçmiş"],
    scenario: &["Örnek", "Senaryo"],
    scenario_outline: &["Senaryo taslağı"],
    examples: &["Örnekler"],
    rule: &["Kural"],
    given: &["* ", "Diyelim ki "],
    when: &["* ", "Eğer ki "],
    then: &["* ", "O zaman "],
    and: &["* ", "Ve "],
    but: &["* ", "Fakat ", "Ama "],
};

pub const TT: Dialect = Dialect {
    code: "tt",
    name: "Tatar",
    native: "Татарча",
    feature: &["Мөмкинлек", "Үзенчәлеклелек"],
    background: &["Кереш"],
    scenario: &["Сценарий"],
    scenario_outline: &["Сценарийның төзелеше"],
    examples: &["Үрнәкләр", "Мисаллар"],
    rule: &["Rule"],
    given: &["* ", "Әйтик "],
    when: &["* ", "Әгәр "],
    then: &["* ", "Нәтиҗәдә "],
    and: &["* ", "Һәм ", "Вә "],
    but: &["* ", "Ләкин ", "Әмма "],
};

pub const UK: Dialect = Dialect {
    code: "uk",
    name: "Ukrainian",
    native: "Українська",
    feature: &["Функціонал"],
    background: &["Передумова"],
    scenario: &["Приклад", "Сценарій"],
    scenario_outline: &["Структура сценарію"],
    examples: &["Приклади"],
    rule: &["Rule"],
    given: &["* ", "Припустимо ", "Припустимо, що ", "Нехай ", "Дано "],
    when: &["* ", "Якщо ", "Коли "],
    then: &["* ", "То ", "Тоді "],
    and: &["* ", "І ", "А також ", "Та "],
    but: &["* ", "Але "],
};

pub const UR: Dialect = Dialect {
    code: "ur",
    name: "Urdu",
    native: "اردو",
    feature: &["صلاحیت", "کاروبار کی ضرورت", "خصوصیت"],
    background: &["پس منظر"],
    scenario: &["منظرنامہ"],
    scenario_outline: &["منظر نامے کا خاکہ"],
    examples: &["مثالیں"],
    rule: &["Rule"],
    given: &["* ", "اگر ", "بالفرض ", "فرض کیا "],
    when: &["* ", "جب "],
    then: &["* ", "پھر ", "تب "],
    and: &["* ", "اور "],
    but: &["* ", "لیکن "],
};

pub const UZ: Dialect = Dialect {
    code: "uz",
    name: "Uzbek",
    native: "Узбекча",
    feature: &["Функционал"],
    background: &["Тарих"],
    scenario: &["Сценарий"],
    scenario_outline: &["Сценарий структураси"],
    examples: &["Мисоллар"],
    rule: &["Rule"],
    given: &["* ", "Belgilangan "],
    when: &["* ", "Агар "],
    then: &["* ", "Унда "],
    and: &["* ", "Ва "],
    but: &["* ", "Лекин ", "Бирок ", "Аммо "],
};

pub const VI: Dialect = Dialect {
    code: "vi",
    name: "Vietnamese",
    native: "Tiếng Việt",
    feature: &["Tính năng"],
    background: &["Bối cảnh"],
    scenario: &["Tình huống", "Kịch bản"],
    scenario_outline: &["Khung tình huống", "Khung kịch bản"],
    examples: &["Dữ liệu"],
    rule: &["Rule"],
    given: &["* ", "Biết ", "Cho "],
    when: &["* ", "Khi "],
    then: &["* ", "Thì "],
    and: &["* ", "Và "],
    but: &["* ", "Nhưng "],
};

pub const ZH_TW: Dialect = Dialect {
    code: "zh-TW",
    name: "Chinese traditional",
    native: "繁體中文",
    feature: &["功能"],
    background: &["背景"],
    scenario: &["場景", "劇本"],
    scenario_outline: &["場景大綱", "劇本大綱"],
    examples: &["例子"],
    rule: &["Rule"],
    given: &["* ", "假如", "假設", "假定"],
    when: &["* ", "當"],
    then: &["* ", "那麼"],
    and: &["* ", "而且", "並且", "同時"],
    but: &["* ", "但是"],
};
