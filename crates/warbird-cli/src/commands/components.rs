//! Components command handler for listing catalog entries.

use anyhow::Result;

use warbird_lib::craft::catalog;

/// Handle the components subcommand.
///
/// With no kind filter, prints every catalog table in selection order.
pub fn handle_components_command(kind: Option<&str>) -> Result<()> {
    let Some(kind) = kind else {
        print_doctrines();
        println!();
        print_structures();
        println!();
        print_wings();
        println!();
        print_landing_gear();
        println!();
        print_engines();
        println!();
        print_propellers();
        println!();
        print_cooling();
        println!();
        print_fuel_systems();
        println!();
        print_superchargers();
        println!();
        print_features();
        println!();
        print_armaments();
        return Ok(());
    };

    match kind.trim().to_lowercase().as_str() {
        "doctrines" => print_doctrines(),
        "structures" => print_structures(),
        "wings" => print_wings(),
        "landing-gear" => print_landing_gear(),
        "engines" => print_engines(),
        "propellers" => print_propellers(),
        "cooling" => print_cooling(),
        "fuel-systems" => print_fuel_systems(),
        "superchargers" => print_superchargers(),
        "features" => print_features(),
        "armaments" => print_armaments(),
        other => {
            return Err(anyhow::anyhow!(
                "unknown component kind '{}'; expected one of: doctrines, structures, wings, \
                 landing-gear, engines, propellers, cooling, fuel-systems, superchargers, \
                 features, armaments",
                other
            ));
        }
    }

    Ok(())
}

fn print_doctrines() {
    let doctrines = catalog::doctrines();
    println!("Doctrines ({}):", doctrines.len());
    println!(
        "{:<20} {:>6} {:>6} {:>6} {:>6} {:>8} {:>8}",
        "Name", "Drag", "Power", "Speed", "Range", "Ceiling", "Agility"
    );
    for doctrine in doctrines {
        let mods = doctrine.modifiers;
        println!(
            "{:<20} {:>6.2} {:>6.2} {:>6.2} {:>6.2} {:>8.2} {:>8.2}",
            doctrine.name,
            mods.drag,
            mods.power,
            mods.speed,
            mods.range,
            mods.ceiling,
            mods.maneuverability
        );
    }
}

fn print_structures() {
    let structures = catalog::structures();
    println!("Structures ({}):", structures.len());
    println!(
        "{:<22} {:>12} {:>6} {:>8} {:>12}",
        "Name", "Weight (kg)", "Cost", "Cd0", "Reliability"
    );
    for structure in structures {
        println!(
            "{:<22} {:>12.0} {:>6.0} {:>8.3} {:>12.2}",
            structure.name, structure.weight_kg, structure.cost, structure.cd_0, structure.reliability
        );
    }
}

fn print_wings() {
    let wings = catalog::wings();
    println!("Wings ({}):", wings.len());
    println!(
        "{:<14} {:>12} {:>6} {:>10} {:>7} {:>7} {:>8}",
        "Name", "Weight (kg)", "Cost", "Area (m2)", "CLmax", "AR", "Oswald"
    );
    for wing in wings {
        println!(
            "{:<14} {:>12.0} {:>6.0} {:>10.1} {:>7.2} {:>7.1} {:>8.2}",
            wing.name,
            wing.weight_kg,
            wing.cost,
            wing.wing_area_m2,
            wing.cl_max,
            wing.aspect_ratio,
            wing.oswald_efficiency
        );
    }
}

fn print_landing_gear() {
    let gears = catalog::landing_gears();
    println!("Landing gear ({}):", gears.len());
    println!(
        "{:<16} {:>12} {:>6} {:>12}",
        "Name", "Weight (kg)", "Cost", "Reliability"
    );
    for gear in gears {
        println!(
            "{:<16} {:>12.0} {:>6.0} {:>12.2}",
            gear.name, gear.weight_kg, gear.cost, gear.reliability
        );
    }
}

fn print_engines() {
    let engines = catalog::engines();
    println!("Engines ({}):", engines.len());
    println!(
        "{:<14} {:>12} {:>6} {:>10} {:>12}",
        "Name", "Weight (kg)", "Cost", "Power (hp)", "Reliability"
    );
    for engine in engines {
        println!(
            "{:<14} {:>12.0} {:>6.0} {:>10.0} {:>12.2}",
            engine.name, engine.weight_kg, engine.cost, engine.power_hp, engine.reliability
        );
    }
}

fn print_propellers() {
    let propellers = catalog::propellers();
    println!("Propellers ({}):", propellers.len());
    println!(
        "{:<18} {:>12} {:>6} {:>12}",
        "Name", "Weight (kg)", "Cost", "Efficiency"
    );
    for propeller in propellers {
        println!(
            "{:<18} {:>12.0} {:>6.0} {:>12.2}",
            propeller.name, propeller.weight_kg, propeller.cost, propeller.efficiency
        );
    }
}

fn print_cooling() {
    let systems = catalog::cooling_systems();
    println!("Cooling ({}):", systems.len());
    println!(
        "{:<16} {:>12} {:>6} {:>12}",
        "Name", "Weight (kg)", "Cost", "Reliability"
    );
    for system in systems {
        println!(
            "{:<16} {:>12.0} {:>6.0} {:>12.2}",
            system.name, system.weight_kg, system.cost, system.reliability
        );
    }
}

fn print_fuel_systems() {
    let systems = catalog::fuel_systems();
    println!("Fuel systems ({}):", systems.len());
    println!(
        "{:<20} {:>12} {:>6} {:>12}",
        "Name", "Weight (kg)", "Cost", "Range (km)"
    );
    for system in systems {
        println!(
            "{:<20} {:>12.0} {:>6.0} {:>12.0}",
            system.name, system.weight_kg, system.cost, system.base_range_km
        );
    }
}

fn print_superchargers() {
    let superchargers = catalog::superchargers();
    println!("Superchargers ({}):", superchargers.len());
    println!(
        "{:<24} {:>12} {:>6} {:>10} {:>12}",
        "Name", "Weight (kg)", "Cost", "Rated (m)", "Reliability"
    );
    for supercharger in superchargers {
        match supercharger.rated_altitude_m {
            Some(rated) => println!(
                "{:<24} {:>12.0} {:>6.0} {:>10.0} {:>12.2}",
                supercharger.name,
                supercharger.weight_kg,
                supercharger.cost,
                rated,
                supercharger.reliability
            ),
            None => println!(
                "{:<24} {:>12.0} {:>6.0} {:>10} {:>12.2}",
                supercharger.name,
                supercharger.weight_kg,
                supercharger.cost,
                "-",
                supercharger.reliability
            ),
        }
    }
}

fn print_features() {
    let features = catalog::features();
    println!("Features ({}):", features.len());
    println!(
        "{:<20} {:>12} {:>6} {:>12}",
        "Name", "Weight (kg)", "Cost", "Reliability"
    );
    for feature in features {
        println!(
            "{:<20} {:>12.0} {:>6.0} {:>12.2}",
            feature.name, feature.weight_kg, feature.cost, feature.reliability
        );
    }
}

fn print_armaments() {
    let armaments = catalog::armaments();
    println!("Armaments ({}):", armaments.len());
    println!(
        "{:<18} {:>12} {:>6}",
        "Name", "Weight (kg)", "Cost"
    );
    for armament in armaments {
        println!(
            "{:<18} {:>12.0} {:>6.0}",
            armament.name, armament.weight_kg, armament.cost
        );
    }
}
