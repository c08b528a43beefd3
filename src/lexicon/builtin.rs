//! Built-in Spanish airline lexicon.
//!
//! Keywords and patterns are written in normalized form: lowercase, no
//! accents, and `ñ` already turned into a space the way the normalizer
//! renders it (`contraseña` is matched as `contrase a`). Category, type and
//! pattern order here is the order used to break ties.

use crate::analysis::MarkerSet;
use crate::lexicon::config::{CategoryConfig, ContextPatternConfig, LexiconConfig, TypeConfig};
use crate::lexicon::weight::WeightProfile;

/// Id of the catch-all category.
pub const SENTINEL_CATEGORY: &str = "Otros";

struct CategoryData {
    id: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
    types: &'static [&'static str],
    domain: Option<&'static str>,
    context: &'static [(&'static str, &'static str)],
    weights: WeightProfile,
}

const CATEGORIES: &[CategoryData] = &[
    CategoryData {
        id: "Datos_Pasajero",
        description: "Comentarios relacionados con el ingreso de los datos de los pasajeros",
        keywords: &["pasajero", "datos", "nombre", "documento", "identificacion", "informacion"],
        types: &["Validación", "Error", "Incompleto", "Corrección"],
        domain: Some(
            "pasajero|pasajeros|datos|informacion|nombre|apellido|documento|pasaporte|identidad|identificacion",
        ),
        context: &[],
        weights: WeightProfile::new(0.4, 0.4, 0.2),
    },
    CategoryData {
        id: "Website",
        description: "Comentarios asociados al proceso de compra general en el sitio web",
        keywords: &[
            "web", "sitio", "pagina", "navegacion", "interfaz", "plataforma", "sistema", "pega",
            "lento", "confuso", "login", "entrar", "acceso", "autenticar", "confundir",
            "experiencia",
        ],
        types: &[
            "Usabilidad", "Navegación", "Error", "Funcionalidad", "Lentitud", "Confuso",
            "Experiencia", "Login",
        ],
        domain: Some(
            "web|sitio|pagina|pagina web|navegador|internet|online|en linea|aplicacion|app|movil|celular|telefono",
        ),
        context: &[
            (
                "Lentitud",
                r"(?:muy\s+)?(?:lento|lenta|tarda|demora|pega|se pega|lentitud|tardar|esperar|espera|esperando|carga|cargando)(?:\s+mucho)?",
            ),
            (
                "Confuso",
                r"(?:muy\s+)?(?:confuso|confusa|confusion|dificil de entender|confundir|entorpecer|complicado|no entiendo|no se entiende|poco claro|dificil|complejo)",
            ),
            (
                "Error",
                r"(?:hay un |tiene |da |sale |aparece |muestra )?(?:error|fallo|problema|incorrecto|falla|no funciona|no sirve|no carga|no responde|se cae|crashea|bug|pantalla azul)",
            ),
            (
                "Login",
                r"(?:el |la |el proceso de |la pagina de )?(?:login|entrar|acceso|autenticar|autenticacion|cliente banco|tarjeta|contrase a|usuario|cuenta|iniciar sesion|registro)(?:\s+(?:no funciona|falla|error|problema))?",
            ),
            (
                "Experiencia",
                r"(?:mala |pesima |horrible |terrible )?(?:experiencia|molesto|molesta|entorpecer|confundir|cargado|publicidad|interfaz|dise o|usabilidad|navegacion|proceso)(?:\s+(?:complicado|dificil|malo|pesimo))?",
            ),
        ],
        weights: WeightProfile::new(0.5, 0.3, 0.2),
    },
    CategoryData {
        id: "Proceso_Pago",
        description: "Comentarios asociados específicamente al proceso de pago",
        keywords: &[
            "pago", "tarjeta", "transferencia", "factura", "cobro", "rechazo", "rechazado",
            "rechazan", "rechazar",
        ],
        types: &["Error", "Proceso", "Método", "Confirmación", "Rechazo"],
        domain: Some(
            "pago|tarjeta|credito|debito|banco|transferencia|efectivo|dinero|costo|precio|monto|importe",
        ),
        context: &[
            (
                "Rechazo",
                r"(?:me |se |el pago |la tarjeta |el banco )?(?:rechazo|rechazado|rechazan|rechazar|no acepta|no pasa|no procesa|tarjeta rechazada|declina|declined)",
            ),
            (
                "Error",
                r"(?:error|fallo|problema|incorrecto|falla|no funciona|no sirve|no carga|no responde|se cae|pago fallido|transaccion fallida)(?:\s+(?:al pagar|en el pago|durante el pago|con el pago))?",
            ),
            (
                "Proceso",
                r"(?:el |la |el proceso de |la forma de )?(?:pago|compra|transaccion|cargo|cobro)(?:\s+(?:es complicado|es dificil|no funciona|falla|tiene problemas))?",
            ),
        ],
        weights: WeightProfile::new(0.4, 0.4, 0.2),
    },
    CategoryData {
        id: "Discount_Club",
        description: "Comentarios relacionados con la membresía Discount Club",
        keywords: &["discount club", "membresia", "club", "beneficios", "descuento", "miembro"],
        types: &["Beneficios", "Registro", "Renovación", "Uso"],
        domain: Some(
            "club|descuento|beneficio|beneficios|membresia|miembro|socio|descuentos|promocion",
        ),
        context: &[],
        weights: WeightProfile::new(0.5, 0.3, 0.2),
    },
    CategoryData {
        id: "Promociones",
        description: "Comentarios relacionados con descuentos, ofertas y promociones",
        keywords: &["promocion", "descuento", "oferta", "codigo", "cupon", "rebaja", "reduccion"],
        types: &["Oferta", "Descuento", "Código", "Vigencia"],
        domain: Some(
            "promocion|promociones|oferta|ofertas|descuento|descuentos|beneficio|beneficios|regalo|regalos",
        ),
        context: &[],
        weights: WeightProfile::new(0.5, 0.3, 0.2),
    },
    CategoryData {
        id: "Precios",
        description: "Comentarios asociados a los precios de vuelos, equipaje, etc.",
        keywords: &[
            "precio", "costo", "tarifa", "caro", "barato", "economico", "costoso", "aumentan",
            "aumento", "excesivo", "irracional", "abusivo",
        ],
        types: &["Alto", "Bajo", "Comparación", "Transparencia", "Cambia", "Tarifa"],
        domain: Some(
            "precio|costo|tarifa|monto|importe|valor|pago|caro|barato|economico|costoso|excesivo",
        ),
        context: &[
            (
                "Cambia",
                r"(?:el |los |el precio |los precios )?(?:cambia|aumenta|aumentan|varia|varian|diferente|distinto|otro precio|precio diferente|sube|suben|incrementa|incrementan)(?:\s+(?:mucho|constantemente|siempre))?",
            ),
            (
                "Alto",
                r"(?:muy |demasiado |extremadamente )?(?:alto|caro|costoso|elevado|excesivo|demasiado|mucho dinero|precio alto|precios altos|tarifas altas)",
            ),
            (
                "Tarifa",
                r"(?:la |las |el cobro de |el cargo por )?(?:tarifa|excesivo|irracional|abusivo|aprovechar|monopolio|impuesto|cargo|cargos adicionales|costos extra|cargos ocultos)",
            ),
        ],
        weights: WeightProfile::new(0.6, 0.3, 0.1),
    },
    CategoryData {
        id: "Disponibilidad_Vuelo",
        description: "Comentarios sobre disponibilidad de horarios, destinos o conexiones",
        keywords: &["disponible", "horario", "vuelo", "ruta", "conexion", "escala"],
        types: &["Horarios", "Destinos", "Conexiones", "Opciones"],
        domain: Some(
            "vuelo|vuelos|disponibilidad|disponible|horario|hora|fecha|destino|ruta|conexion|escala",
        ),
        context: &[
            (
                "Horarios",
                r"(?:los |el |la |los horarios |el horario )?(?:hora|horario|tiempo|disponible|disponibilidad|vuelo|vuelos|salida|llegada)(?:\s+(?:no hay|no existen|limitados|pocos))?",
            ),
            (
                "Destinos",
                r"(?:los |el |la |los destinos |el destino )?(?:destino|ruta|lugar|ciudad|vuelo directo|conexion|escala)(?:\s+(?:no hay|no existen|limitados|pocos))?",
            ),
            (
                "Opciones",
                r"(?:pocas |limitadas |sin )?(?:opcion|opciones|alternativa|alternativas|vuelo|vuelos|ruta|rutas)(?:\s+(?:disponibles|existentes))?",
            ),
        ],
        weights: WeightProfile::new(0.4, 0.4, 0.2),
    },
    CategoryData {
        id: "Aeropuerto",
        description: "Temas relacionados con el aeropuerto externos al proceso de compra web",
        keywords: &["aeropuerto", "terminal", "check in", "mostrador", "counter"],
        types: &["Servicios", "Ubicación", "Instalaciones", "Personal"],
        domain: Some(
            "aeropuerto|terminal|pista|vuelo|avion|aeronave|aerolinea|aeropuertos|sala|puerta",
        ),
        context: &[
            (
                "Ubicación",
                r"(?:el |la |en el |en la )?(?:aeropuerto|terminal|pista|vuelo|avion|aeronave|aerolinea|aeropuertos|sala de espera|puerta de embarque)",
            ),
            (
                "Servicios",
                r"(?:mal |pesimo |horrible |terrible )?(?:servicio|servicios|atencion|personal|empleados|staff|asistencia|ayuda|counter|mostrador)",
            ),
        ],
        weights: WeightProfile::new(0.3, 0.5, 0.2),
    },
    CategoryData {
        id: "Seats",
        description: "Temas relacionados con los asientos del avión",
        keywords: &[
            "asiento", "silla", "clase", "comfort", "ubicacion", "seleccion", "elegir", "escoger",
        ],
        types: &["Selección", "Comodidad", "Tipo", "Ubicación", "Precio"],
        domain: Some(
            "asiento|silla|asientos|sillas|comodidad|espacio|pasillo|ventana|fila|fila de asientos",
        ),
        context: &[
            (
                "Comodidad",
                r"(?:muy |poco |nada |super )?(?:asiento|asientos|silla|sillas|comodo|comoda|incomodo|incomoda|espacio|espacios|apretado|estrecho)",
            ),
            (
                "Selección",
                r"(?:no pude |no puedo |imposible |dificil )?(?:seleccion|elegir|elegido|elegida|escoger|escogido|escogida|asignado|asignada|reservar asiento|cambiar asiento)",
            ),
        ],
        weights: WeightProfile::new(0.3, 0.5, 0.2),
    },
    CategoryData {
        id: "Equipaje",
        description: "Todo lo asociado a los equipajes",
        keywords: &[
            "maleta", "equipaje", "bagaje", "valija", "carry on", "mochila", "bolso",
        ],
        types: &["Permitido", "Exceso", "Pérdida", "Daño", "Precio"],
        domain: Some("equipaje|maleta|valija|bolso|mochila|bulto|carga|peso|sobrepeso|exceso"),
        context: &[
            (
                "Daño",
                r"(?:mi |el |la |mi equipaje |mi maleta )?(?:da ad[oa]s?|\bda os?\b|roto|rota|rotos|rotas|rompio|rompieron|maltrato|maltratado|destrozado|destruido|golpeado|deteriorado)",
            ),
            (
                "Pérdida",
                r"(?:mi |el |la |mi equipaje |mi maleta )?(?:perdida|perdido|extraviado|desaparecido|no llego|no aparece|no encuentro|perdieron|extraviaron)",
            ),
            (
                "Exceso",
                r"(?:cobro |cargo |precio |tarifa )?(?:por exceso|exceso de peso|sobrepeso|equipaje extra|maleta adicional|cargo adicional)",
            ),
        ],
        weights: WeightProfile::new(0.4, 0.4, 0.2),
    },
    CategoryData {
        id: "Cambios_Devoluciones",
        description: "Temas relacionados con cancelaciones y/o devoluciones de vuelos",
        keywords: &["cancelar", "devolver", "cambio", "reembolso", "cancelacion"],
        types: &["Cancelación", "Devolución", "Cambio", "Política"],
        domain: Some(
            "cambio|cambios|devolucion|devoluciones|reembolso|reembolsos|cancelacion|cancelaciones|modificar|modificacion",
        ),
        context: &[],
        weights: WeightProfile::new(0.4, 0.4, 0.2),
    },
    CategoryData {
        id: SENTINEL_CATEGORY,
        description: "Categoría para comentarios que no encajan en las anteriores",
        keywords: &[],
        types: &["General", "Otro"],
        domain: None,
        context: &[],
        weights: WeightProfile::new(0.4, 0.4, 0.2),
    },
];

const TYPES: &[(&str, &[&str])] = &[
    ("Validación", &["validar", "verificar", "confirmar", "validacion"]),
    ("Error", &["error", "fallo", "problema", "incorrecto", "falla", "no funciona"]),
    ("Incompleto", &["incompleto", "faltante", "pendiente", "falta"]),
    ("Corrección", &["corregir", "actualizar", "modificar", "cambiar"]),
    ("Usabilidad", &["facil", "dificil", "intuitivo", "complejo", "complicado"]),
    ("Navegación", &["navegar", "menu", "pagina", "seccion", "buscar"]),
    ("Funcionalidad", &["funcionar", "caracteristica", "opcion", "funcion"]),
    ("Lentitud", &["lento", "lenta", "tarda", "demora", "pega", "se pega"]),
    (
        "Confuso",
        &["confuso", "confusa", "confusion", "dificil de entender", "confundir", "entorpecer"],
    ),
    (
        "Experiencia",
        &[
            "experiencia", "molesto", "molesta", "entorpecer", "confundir", "cargado", "publicidad",
        ],
    ),
    (
        "Login",
        &[
            "login", "entrar", "acceso", "autenticar", "autenticacion", "cliente banco", "tarjeta",
        ],
    ),
    ("Proceso", &["proceso", "paso", "etapa", "tramite"]),
    ("Método", &["metodo", "forma", "manera", "medio"]),
    ("Confirmación", &["confirmar", "verificar", "comprobar", "confirmacion"]),
    ("Rechazo", &["rechazo", "rechazado", "rechazan", "rechazar", "no acepta"]),
    ("Beneficios", &["beneficio", "ventaja", "privilegio", "descuento"]),
    ("Registro", &["registro", "inscripcion", "afiliacion", "registrar"]),
    ("Renovación", &["renovar", "actualizar", "renovacion", "actualizacion"]),
    ("Uso", &["usar", "utilizar", "aplicar"]),
    ("Oferta", &["oferta", "promocion", "descuento", "rebaja"]),
    ("Descuento", &["descuento", "reduccion", "rebaja"]),
    ("Código", &["codigo", "cupon", "promo", "promocion"]),
    ("Vigencia", &["valido", "vigente", "expirar", "expiracion"]),
    ("Alto", &["alto", "caro", "costoso", "elevado", "muy caro"]),
    ("Bajo", &["bajo", "barato", "economico", "accesible"]),
    ("Comparación", &["comparar", "diferencia", "otro", "otros"]),
    ("Transparencia", &["transparente", "claro", "visible", "entendible"]),
    ("Cambia", &["cambia", "aumenta", "aumentan", "varia", "varian"]),
    (
        "Tarifa",
        &["tarifa", "excesivo", "irracional", "abusivo", "aprovechar", "monopolio"],
    ),
    ("Horarios", &["hora", "horario", "tiempo", "disponible"]),
    ("Destinos", &["destino", "ruta", "lugar", "ciudad"]),
    ("Conexiones", &["conexion", "escala", "parada", "conectar"]),
    ("Opciones", &["opcion", "alternativa", "disponible", "opciones"]),
    ("Servicios", &["servicio", "atencion", "asistencia", "ayuda"]),
    ("Ubicación", &["ubicacion", "lugar", "sitio", "posicion"]),
    (
        "Instalaciones",
        &["instalacion", "infraestructura", "facilidad", "equipamiento"],
    ),
    ("Personal", &["personal", "empleado", "staff", "atendente"]),
    ("Selección", &["seleccionar", "elegir", "escoger", "seleccion"]),
    ("Comodidad", &["comodo", "confort", "espacio", "comodidad"]),
    ("Tipo", &["tipo", "clase", "categoria", "modelo"]),
    ("Precio", &["precio", "costo", "cobran", "cargo"]),
    ("Permitido", &["permitido", "autorizado", "aceptado", "permite"]),
    ("Exceso", &["exceso", "sobrepeso", "extra", "sobrepasa"]),
    ("Pérdida", &["perdida", "extraviado", "desaparecido", "perdido"]),
    ("Daño", &["roto", "rota", "deteriorado", "maltratado", "destrozado"]),
    ("Cancelación", &["cancelar", "cancelacion", "anular", "cancelado"]),
    ("Devolución", &["devolver", "reembolso", "reembolsar", "devolucion"]),
    ("Cambio", &["cambiar", "modificar", "alterar", "cambio"]),
    ("Política", &["politica", "norma", "regla", "condicion"]),
    ("General", &["general", "otro", "varios", "diversos"]),
    ("Otro", &[]),
];

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// The built-in Spanish lexicon as a raw configuration.
pub fn spanish_config() -> LexiconConfig {
    LexiconConfig {
        sentinel: SENTINEL_CATEGORY.to_string(),
        categories: CATEGORIES
            .iter()
            .map(|data| CategoryConfig {
                id: data.id.to_string(),
                description: data.description.to_string(),
                keywords: strings(data.keywords),
                types: strings(data.types),
                domain_pattern: data.domain.map(str::to_string),
                context_patterns: data
                    .context
                    .iter()
                    .map(|(type_id, pattern)| ContextPatternConfig {
                        type_id: type_id.to_string(),
                        pattern: pattern.to_string(),
                    })
                    .collect(),
                default_weights: data.weights,
            })
            .collect(),
        types: TYPES
            .iter()
            .map(|(id, keywords)| TypeConfig {
                id: id.to_string(),
                keywords: strings(keywords),
            })
            .collect(),
        markers: MarkerSet::spanish(),
        stop_words: None,
    }
}
