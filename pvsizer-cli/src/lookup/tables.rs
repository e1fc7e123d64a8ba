//! Tariffs are average low-voltage (group B) prices with taxes.

pub struct RegionEntry {
    pub code: &'static str,
    pub name: &'static str,

    /// Equivalent hours of full sun per day.
    pub irradiance: f64,

    /// Distributor and unit price serving most of the region.
    pub tariff: (&'static str, f64),

    /// Localities served by a different distributor or at a different price.
    pub localities: &'static [(&'static str, (&'static str, f64))],

    /// Localities offered as suggestions.
    pub cities: &'static [&'static str],
}

pub const DEFAULT_REGION: RegionEntry = RegionEntry {
    code: "PADRAO",
    name: "Default",
    irradiance: 4.5,
    tariff: ("Local utility", 0.85),
    localities: &[],
    cities: &[],
};

pub const REGIONS: &[RegionEntry] = &[
    RegionEntry {
        code: "AC",
        name: "Acre",
        irradiance: 4.9,
        tariff: ("Energisa Acre", 0.98),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "AL",
        name: "Alagoas",
        irradiance: 5.0,
        tariff: ("Equatorial Alagoas", 0.92),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "AP",
        name: "Amapá",
        irradiance: 4.7,
        tariff: ("Equatorial Amapá", 0.88),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "AM",
        name: "Amazonas",
        irradiance: 4.6,
        tariff: ("Amazonas Energia", 0.95),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "BA",
        name: "Bahia",
        irradiance: 5.2,
        tariff: ("Neoenergia Coelba", 0.96),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "CE",
        name: "Ceará",
        irradiance: 5.3,
        tariff: ("Enel Ceará", 0.94),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "DF",
        name: "Distrito Federal",
        irradiance: 4.7,
        tariff: ("Neoenergia Brasília", 0.81),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "ES",
        name: "Espírito Santo",
        irradiance: 4.6,
        tariff: ("EDP Espírito Santo", 0.86),
        localities: &[
            ("Santa Teresa", ("Santa Maria (ELFSM)", 0.84)),
        ],
        cities: &[],
    },
    RegionEntry {
        code: "GO",
        name: "Goiás",
        irradiance: 4.8,
        tariff: ("Equatorial Goiás", 0.83),
        localities: &[
            ("Chevreul", ("Chesp", 0.85)),
        ],
        cities: &[],
    },
    RegionEntry {
        code: "MA",
        name: "Maranhão",
        irradiance: 5.0,
        tariff: ("Equatorial Maranhão", 0.94),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "MT",
        name: "Mato Grosso",
        irradiance: 4.7,
        tariff: ("Energisa MT", 0.91),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "MS",
        name: "Mato Grosso do Sul",
        irradiance: 4.6,
        tariff: ("Energisa MS", 0.95),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "MG",
        name: "Minas Gerais",
        irradiance: 4.5,
        tariff: ("CEMIG", 0.93),
        localities: &[
            ("Poços de Caldas", ("DMED", 0.88)),
            ("Cataguases", ("Energisa Minas-Rio", 0.96)),
            ("Leopoldina", ("Energisa Minas-Rio", 0.96)),
            ("Muriaé", ("Energisa Minas-Rio", 0.96)),
            ("Manhuaçu", ("Energisa Minas-Rio", 0.96)),
            ("Ubá", ("Energisa Minas-Rio", 0.96)),
            ("São João Nepomuceno", ("Energisa Minas-Rio", 0.96)),
        ],
        cities: &[
            "Belo Horizonte",
            "Uberlândia",
            "Contagem",
            "Juiz de Fora",
        ],
    },
    RegionEntry {
        code: "PA",
        name: "Pará",
        irradiance: 4.5,
        tariff: ("Equatorial Pará", 1.08),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "PB",
        name: "Paraíba",
        irradiance: 5.1,
        tariff: ("Energisa Paraíba", 0.88),
        localities: &[
            ("João Pessoa", ("Energisa Borborema", 0.89)),
        ],
        cities: &[],
    },
    RegionEntry {
        code: "PR",
        name: "Paraná",
        irradiance: 4.2,
        tariff: ("Copel", 0.8),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "PE",
        name: "Pernambuco",
        irradiance: 5.0,
        tariff: ("Neoenergia Pernambuco", 0.9),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "PI",
        name: "Piauí",
        irradiance: 5.0,
        tariff: ("Equatorial Piauí", 0.95),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "RJ",
        name: "Rio de Janeiro",
        irradiance: 4.3,
        tariff: ("Enel RJ", 1.05),
        localities: &[
            ("Rio de Janeiro", ("Light", 1.15)),
            ("Nova Iguaçu", ("Light", 1.15)),
            ("Belford Roxo", ("Light", 1.15)),
            ("São João de Meriti", ("Light", 1.15)),
            ("Duque de Caxias", ("Light", 1.15)),
            ("Mesquita", ("Light", 1.15)),
            ("Nilópolis", ("Light", 1.15)),
            ("Queimados", ("Light", 1.15)),
            ("Paracambi", ("Light", 1.15)),
            ("Seropédica", ("Light", 1.15)),
            ("Itaguaí", ("Light", 1.15)),
            ("Barra do Piraí", ("Light", 1.15)),
            ("Piraí", ("Light", 1.15)),
            ("Rio Claro", ("Light", 1.15)),
            ("Volta Redonda", ("Light", 1.15)),
            ("Barra Mansa", ("Light", 1.15)),
            ("Valença", ("Light", 1.15)),
            ("Vassouras", ("Light", 1.15)),
            ("Três Rios", ("Light", 1.15)),
            ("Nova Friburgo", ("Energisa Nova Friburgo", 1.02)),
        ],
        cities: &[
            "Rio de Janeiro",
            "São Gonçalo",
            "Duque de Caxias",
            "Nova Iguaçu",
            "Niterói",
        ],
    },
    RegionEntry {
        code: "RN",
        name: "Rio Grande do Norte",
        irradiance: 5.4,
        tariff: ("Neoenergia Cosern", 0.89),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "RS",
        name: "Rio Grande do Sul",
        irradiance: 4.0,
        tariff: ("RGE Sul", 0.88),
        localities: &[
            ("Porto Alegre", ("CEEE Equatorial", 0.82)),
            ("Pelotas", ("CEEE Equatorial", 0.82)),
            ("Viamão", ("CEEE Equatorial", 0.82)),
            ("Alvorada", ("CEEE Equatorial", 0.82)),
            ("Rio Grande", ("CEEE Equatorial", 0.82)),
            ("Bagé", ("CEEE Equatorial", 0.82)),
            ("Camaquã", ("CEEE Equatorial", 0.82)),
            ("Guaíba", ("CEEE Equatorial", 0.82)),
            ("Osório", ("CEEE Equatorial", 0.82)),
            ("Tramandaí", ("CEEE Equatorial", 0.82)),
            ("Ijuí", ("Demei", 0.85)),
        ],
        cities: &[],
    },
    RegionEntry {
        code: "RO",
        name: "Rondônia",
        irradiance: 4.3,
        tariff: ("Energisa Rondônia", 0.88),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "RR",
        name: "Roraima",
        irradiance: 4.7,
        tariff: ("Roraima Energia", 0.85),
        localities: &[],
        cities: &[],
    },
    RegionEntry {
        code: "SC",
        name: "Santa Catarina",
        irradiance: 4.1,
        tariff: ("Celesc", 0.76),
        localities: &[
            ("Jaraguá do Sul", ("Celesc", 0.76)),
            ("Urussanga", ("EFLUL", 0.75)),
            ("Içara", ("Cooperaliança", 0.74)),
        ],
        cities: &[],
    },
    RegionEntry {
        code: "SP",
        name: "São Paulo",
        irradiance: 4.4,
        tariff: ("CPFL Paulista", 0.92),
        localities: &[
            ("São Paulo", ("Enel SP", 0.85)),
            ("Osasco", ("Enel SP", 0.85)),
            ("Santo André", ("Enel SP", 0.85)),
            ("São Bernardo do Campo", ("Enel SP", 0.85)),
            ("São Caetano do Sul", ("Enel SP", 0.85)),
            ("Diadema", ("Enel SP", 0.85)),
            ("Barueri", ("Enel SP", 0.85)),
            ("Carapicuíba", ("Enel SP", 0.85)),
            ("Cotia", ("Enel SP", 0.85)),
            ("Taboão da Serra", ("Enel SP", 0.85)),
            ("Itapecerica da Serra", ("Enel SP", 0.85)),
            ("Embu das Artes", ("Enel SP", 0.85)),
            ("Santana de Parnaíba", ("Enel SP", 0.85)),
            ("Jandira", ("Enel SP", 0.85)),
            ("Guarulhos", ("EDP SP", 0.89)),
            ("Mogi das Cruzes", ("EDP SP", 0.89)),
            ("São José dos Campos", ("EDP SP", 0.89)),
            ("Taubaté", ("EDP SP", 0.89)),
            ("Suzano", ("EDP SP", 0.89)),
            ("Itaquaquecetuba", ("EDP SP", 0.89)),
            ("Jacareí", ("EDP SP", 0.89)),
            ("Caçapava", ("EDP SP", 0.89)),
            ("Pindamonhangaba", ("EDP SP", 0.89)),
            ("Guaratinguetá", ("EDP SP", 0.89)),
            ("Lorena", ("EDP SP", 0.89)),
            ("Caraguatatuba", ("EDP SP", 0.89)),
            ("São Sebastião", ("EDP SP", 0.89)),
            ("Ubatuba", ("EDP SP", 0.89)),
            ("Santos", ("CPFL Piratininga", 0.91)),
            ("Sorocaba", ("CPFL Piratininga", 0.91)),
            ("Jundiaí", ("CPFL Piratininga", 0.91)),
            ("São Vicente", ("CPFL Piratininga", 0.91)),
            ("Praia Grande", ("CPFL Piratininga", 0.91)),
            ("Indaiatuba", ("CPFL Piratininga", 0.91)),
            ("Cubatão", ("CPFL Piratininga", 0.91)),
            ("Vinhedo", ("CPFL Piratininga", 0.91)),
            ("Valinhos", ("CPFL Piratininga", 0.91)),
            ("Salto", ("CPFL Piratininga", 0.91)),
            ("Itu", ("CPFL Piratininga", 0.91)),
            ("Limeira", ("Elektro", 0.9)),
            ("Rio Claro", ("Elektro", 0.9)),
            ("Atibaia", ("Elektro", 0.9)),
            ("Guarujá", ("Elektro", 0.9)),
            ("Bertioga", ("Elektro", 0.9)),
            ("Itanhaém", ("Elektro", 0.9)),
            ("Peruíbe", ("Elektro", 0.9)),
            ("Mongaguá", ("Elektro", 0.9)),
            ("Campos do Jordão", ("Elektro", 0.9)),
            ("Araras", ("Elektro", 0.9)),
            ("Tatuí", ("Elektro", 0.9)),
            ("Votuporanga", ("Elektro", 0.9)),
            ("Fernandópolis", ("Elektro", 0.9)),
            ("Presidente Prudente", ("Energisa SP", 0.95)),
            ("Assis", ("Energisa SP", 0.95)),
            ("Bragança Paulista", ("Energisa Sul-Sudeste", 0.96)),
        ],
        cities: &[
            "São Paulo",
            "Campinas",
            "Guarulhos",
            "São Bernardo do Campo",
            "Santo André",
            "Osasco",
            "Sorocaba",
            "Ribeirão Preto",
            "São José dos Campos",
            "Santos",
            "São João da Boa Vista",
            "São João das Duas Pontes",
        ],
    },
    RegionEntry {
        code: "SE",
        name: "Sergipe",
        irradiance: 4.9,
        tariff: ("Energisa Sergipe", 0.9),
        localities: &[
            ("Estância", ("Sulgipe", 0.92)),
        ],
        cities: &[],
    },
    RegionEntry {
        code: "TO",
        name: "Tocantins",
        irradiance: 4.8,
        tariff: ("Energisa Tocantins", 0.96),
        localities: &[],
        cities: &[],
    },
];
